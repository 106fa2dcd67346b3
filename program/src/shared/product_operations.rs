use pinocchio::{
    error::ProgramError,
    Address,
    ProgramResult,
};
use retailchain_interface::{
    error::RetailError,
    instructions::{
        add_product::AddProductInstructionData,
        update_product::UpdateProductInstructionData,
    },
    state::{
        product::Product,
        transmutable::{
            load,
            Transmutable,
        },
    },
};

use crate::{
    ledger::RecordLedger,
    shared::store_operations::{
        authorize_owner,
        load_store,
    },
};

/// Creates a product under the store at `store_slot` and bumps the store's product count.
///
/// The new product and the incremented store are both built before anything is allocated, so
/// either both records are written or neither is.
pub fn add_product<L: RecordLedger>(
    ledger: &mut L,
    owner: &Address,
    store_slot: &Address,
    product_slot: &Address,
    args: &AddProductInstructionData,
    created_at: i64,
) -> ProgramResult {
    let product = Product::init(
        store_slot,
        args.name,
        args.description,
        args.price,
        args.quantity,
        created_at,
    )?;

    let mut store = load_store(ledger, store_slot)?;
    authorize_owner(ledger, &store, owner)?;

    if ledger.read(product_slot, |_| ())?.is_some() {
        return Err(RetailError::AlreadyInitialized.into());
    }

    store.try_increment_total_products()?;

    ledger.allocate(product_slot, Product::LEN)?;
    ledger.write(product_slot, product.as_bytes())?;
    ledger.write(store_slot, store.as_bytes())
}

/// Returns a copy of the product record at `product_slot`.
///
/// A slot without a valid product can't hold a product of any store, so it fails with
/// `ProductStoreMismatch`.
pub fn load_product<L: RecordLedger>(
    ledger: &L,
    product_slot: &Address,
) -> Result<Product, ProgramError> {
    ledger
        .read(product_slot, |bytes| load::<Product>(bytes).ok().cloned())?
        .flatten()
        .ok_or(RetailError::ProductStoreMismatch.into())
}

/// Overwrites the price and quantity of a product that belongs to the store at `store_slot`.
pub fn update_product<L: RecordLedger>(
    ledger: &mut L,
    owner: &Address,
    store_slot: &Address,
    product_slot: &Address,
    args: &UpdateProductInstructionData,
) -> ProgramResult {
    let store = load_store(ledger, store_slot)?;
    authorize_owner(ledger, &store, owner)?;

    let mut product = load_product(ledger, product_slot)?;
    if &product.store != store_slot {
        return Err(RetailError::ProductStoreMismatch.into());
    }

    product.apply_update(args.price, args.quantity);
    ledger.write(product_slot, product.as_bytes())
}

#[cfg(test)]
mod tests {
    use pinocchio::{
        error::ProgramError,
        Address,
    };
    use retailchain_interface::{
        error::RetailError,
        instructions::{
            add_product::AddProductInstructionData,
            update_product::UpdateProductInstructionData,
        },
        state::{
            product::PRODUCT_SIZE,
            store::STORE_SIZE,
        },
    };

    use super::*;
    use crate::{
        ledger::memory_ledger::MemoryLedger,
        shared::store_operations::{
            initialize_store,
            load_store,
        },
    };

    const OWNER: Address = Address::new_from_array([1u8; 32]);
    const STORE: Address = Address::new_from_array([2u8; 32]);
    const PRODUCT: Address = Address::new_from_array([3u8; 32]);
    const INTRUDER: Address = Address::new_from_array([9u8; 32]);
    const NOW: i64 = 1_700_000_000;

    const TEST_PRODUCT: AddProductInstructionData<'static> = AddProductInstructionData {
        name: "Test Product",
        description: "Test Description",
        price: 100,
        quantity: 10,
    };

    fn ledger_with_store() -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        ledger.set_signers(&[OWNER]);
        initialize_store(&mut ledger, &OWNER, &STORE, "Test Store", "Test Location").unwrap();
        ledger
    }

    #[test]
    fn create_add_update_scenario() {
        let mut ledger = ledger_with_store();

        add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();
        let product = load_product(&ledger, &PRODUCT).unwrap();
        assert_eq!(product.store, STORE);
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.description, "Test Description");
        assert_eq!(product.price(), 100);
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.created_at(), NOW);
        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 1);

        let update = UpdateProductInstructionData {
            price: Some(150),
            quantity: Some(5),
        };
        update_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &update).unwrap();
        let updated = load_product(&ledger, &PRODUCT).unwrap();
        assert_eq!(updated.price(), 150);
        assert_eq!(updated.quantity(), 5);
        assert_eq!(updated.store, product.store);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.description, product.description);
        assert_eq!(updated.created_at(), product.created_at());
        // Updates never count as creations.
        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 1);
    }

    #[test]
    fn product_count_tracks_adds_per_store() {
        let other_store = Address::new_from_array([4u8; 32]);
        let mut ledger = ledger_with_store();
        initialize_store(&mut ledger, &OWNER, &other_store, "Other", "Elsewhere").unwrap();

        for n in 0..10u8 {
            let store = if n % 3 == 0 { &other_store } else { &STORE };
            let product = Address::new_from_array([100 + n; 32]);
            add_product(&mut ledger, &OWNER, store, &product, &TEST_PRODUCT, NOW).unwrap();
        }

        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 6);
        assert_eq!(load_store(&ledger, &other_store).unwrap().total_products(), 4);
    }

    #[test]
    fn non_owner_cannot_add() {
        let mut ledger = ledger_with_store();
        ledger.set_signers(&[INTRUDER]);
        assert_eq!(
            ledger.transact(|ledger| {
                add_product(ledger, &INTRUDER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW)
            }),
            Err(ProgramError::from(RetailError::Unauthorized))
        );
        assert_eq!(ledger.record(&PRODUCT), None);
        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 0);
    }

    #[test]
    fn owner_must_sign_to_add() {
        let mut ledger = ledger_with_store();
        ledger.set_signers(&[]);
        assert_eq!(
            add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW),
            Err(ProgramError::from(RetailError::Unauthorized))
        );
        assert_eq!(ledger.record(&PRODUCT), None);
    }

    #[test]
    fn missing_store_leaves_no_trace() {
        let mut ledger = MemoryLedger::new();
        ledger.set_signers(&[OWNER]);
        assert_eq!(
            ledger.transact(|ledger| {
                add_product(ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW)
            }),
            Err(ProgramError::from(RetailError::StoreNotFound))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn product_slot_must_be_unused() {
        let mut ledger = ledger_with_store();
        add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();
        assert_eq!(
            add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW),
            Err(ProgramError::from(RetailError::AlreadyInitialized))
        );
        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 1);
    }

    #[test]
    fn storage_full_leaves_no_partial_state() {
        let mut ledger = MemoryLedger::with_space_budget(STORE_SIZE + PRODUCT_SIZE - 1);
        ledger.set_signers(&[OWNER]);
        initialize_store(&mut ledger, &OWNER, &STORE, "Test Store", "Test Location").unwrap();

        assert_eq!(
            ledger.transact(|ledger| {
                add_product(ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW)
            }),
            Err(ProgramError::from(RetailError::StorageFull))
        );
        assert_eq!(ledger.record(&PRODUCT), None);
        assert_eq!(load_store(&ledger, &STORE).unwrap().total_products(), 0);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut ledger = ledger_with_store();
        let long_bytes = [b'x'; 129];
        let args = AddProductInstructionData {
            description: core::str::from_utf8(&long_bytes).unwrap(),
            ..TEST_PRODUCT
        };
        assert_eq!(
            add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &args, NOW),
            Err(ProgramError::from(RetailError::FieldTooLong))
        );
        assert_eq!(ledger.record(&PRODUCT), None);
    }

    #[test]
    fn update_is_idempotent() {
        let mut ledger = ledger_with_store();
        add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();
        let update = UpdateProductInstructionData {
            price: Some(150),
            quantity: Some(5),
        };

        update_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &update).unwrap();
        let once = load_product(&ledger, &PRODUCT).unwrap();
        update_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &update).unwrap();
        assert_eq!(load_product(&ledger, &PRODUCT).unwrap(), once);
    }

    #[test]
    fn omitted_values_are_kept() {
        let mut ledger = ledger_with_store();
        add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();

        let price_only = UpdateProductInstructionData {
            price: Some(0),
            quantity: None,
        };
        update_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &price_only).unwrap();
        let product = load_product(&ledger, &PRODUCT).unwrap();
        assert_eq!(product.price(), 0);
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn product_of_another_store_is_a_mismatch() {
        let other_store = Address::new_from_array([4u8; 32]);
        let mut ledger = ledger_with_store();
        initialize_store(&mut ledger, &OWNER, &other_store, "Other", "Elsewhere").unwrap();
        add_product(&mut ledger, &OWNER, &other_store, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();

        let update = UpdateProductInstructionData {
            price: Some(1),
            quantity: Some(1),
        };
        assert_eq!(
            update_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &update),
            Err(ProgramError::from(RetailError::ProductStoreMismatch))
        );
        assert_eq!(load_product(&ledger, &PRODUCT).unwrap().price(), 100);
    }

    #[test]
    fn update_of_an_empty_product_slot_is_a_mismatch() {
        let mut ledger = ledger_with_store();
        let update = UpdateProductInstructionData {
            price: Some(1),
            quantity: Some(1),
        };
        assert_eq!(
            ledger.transact(|ledger| update_product(ledger, &OWNER, &STORE, &PRODUCT, &update)),
            Err(ProgramError::from(RetailError::ProductStoreMismatch))
        );
        assert_eq!(ledger.record(&PRODUCT), None);
    }

    #[test]
    fn update_checks_store_owner_and_product() {
        let mut ledger = ledger_with_store();
        add_product(&mut ledger, &OWNER, &STORE, &PRODUCT, &TEST_PRODUCT, NOW).unwrap();
        let update = UpdateProductInstructionData {
            price: Some(1),
            quantity: Some(1),
        };

        let missing = Address::new_from_array([7u8; 32]);
        assert_eq!(
            update_product(&mut ledger, &OWNER, &missing, &PRODUCT, &update),
            Err(ProgramError::from(RetailError::StoreNotFound))
        );
        assert_eq!(
            update_product(&mut ledger, &OWNER, &STORE, &missing, &update),
            Err(ProgramError::from(RetailError::ProductStoreMismatch))
        );
        // A store record in the product slot isn't a product.
        assert_eq!(
            update_product(&mut ledger, &OWNER, &STORE, &STORE, &update),
            Err(ProgramError::from(RetailError::ProductStoreMismatch))
        );

        ledger.set_signers(&[INTRUDER]);
        assert_eq!(
            update_product(&mut ledger, &INTRUDER, &STORE, &PRODUCT, &update),
            Err(ProgramError::from(RetailError::Unauthorized))
        );
        assert_eq!(load_product(&ledger, &PRODUCT).unwrap().price(), 100);
    }
}
