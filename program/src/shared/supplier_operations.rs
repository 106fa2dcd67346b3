use pinocchio::{
    error::ProgramError,
    Address,
    ProgramResult,
};
use retailchain_interface::{
    authority::authorize,
    error::RetailError,
    instructions::{
        add_supplier_product::AddSupplierProductInstructionData,
        register_supplier::RegisterSupplierInstructionData,
        register_verifier::RegisterVerifierInstructionData,
        update_supplier::UpdateSupplierInstructionData,
    },
    state::{
        supplier::Supplier,
        supplier_product::SupplierProduct,
        transmutable::{
            load,
            Transmutable,
        },
        verifier_credential::VerifierCredential,
    },
};

use crate::ledger::RecordLedger;

/// Creates an unverified supplier at `supplier_slot` controlled by `authority`.
pub fn register_supplier<L: RecordLedger>(
    ledger: &mut L,
    authority: &Address,
    supplier_slot: &Address,
    args: &RegisterSupplierInstructionData,
    created_at: i64,
) -> ProgramResult {
    let supplier = Supplier::init(
        authority,
        args.name,
        args.certification,
        args.description,
        created_at,
    )?;

    if !ledger.caller_signed(authority) {
        return Err(RetailError::Unauthorized.into());
    }
    if ledger.read(supplier_slot, |_| ())?.is_some() {
        return Err(RetailError::AlreadyInitialized.into());
    }

    ledger.allocate(supplier_slot, Supplier::LEN)?;
    ledger.write(supplier_slot, supplier.as_bytes())
}

/// Returns a copy of the supplier record at `supplier_slot`.
pub fn load_supplier<L: RecordLedger>(
    ledger: &L,
    supplier_slot: &Address,
) -> Result<Supplier, ProgramError> {
    ledger
        .read(supplier_slot, |bytes| load::<Supplier>(bytes).ok().cloned())?
        .flatten()
        .ok_or(RetailError::SupplierNotFound.into())
}

/// Checks that `caller` is the supplier's authority and signed the request.
#[inline(always)]
pub fn authorize_supplier<L: RecordLedger>(
    ledger: &L,
    supplier: &Supplier,
    caller: &Address,
) -> ProgramResult {
    if authorize(&supplier.authority, caller) && ledger.caller_signed(caller) {
        Ok(())
    } else {
        Err(RetailError::Unauthorized.into())
    }
}

pub fn update_supplier<L: RecordLedger>(
    ledger: &mut L,
    authority: &Address,
    supplier_slot: &Address,
    args: &UpdateSupplierInstructionData,
) -> ProgramResult {
    let mut supplier = load_supplier(ledger, supplier_slot)?;
    authorize_supplier(ledger, &supplier, authority)?;

    supplier.apply_update(args.certification, args.description)?;
    ledger.write(supplier_slot, supplier.as_bytes())
}

/// Creates a verifier credential at `credential_slot` for the signing `authority`.
pub fn register_verifier<L: RecordLedger>(
    ledger: &mut L,
    authority: &Address,
    credential_slot: &Address,
    args: &RegisterVerifierInstructionData,
) -> ProgramResult {
    let credential =
        VerifierCredential::init(authority, args.verification_level, args.organization)?;

    if !ledger.caller_signed(authority) {
        return Err(RetailError::Unauthorized.into());
    }
    if ledger.read(credential_slot, |_| ())?.is_some() {
        return Err(RetailError::AlreadyInitialized.into());
    }

    ledger.allocate(credential_slot, VerifierCredential::LEN)?;
    ledger.write(credential_slot, credential.as_bytes())
}

/// Marks the supplier at `supplier_slot` as verified on the strength of the credential at
/// `credential_slot`.
///
/// A missing or inactive credential, one held by someone else, and an unsigned `verifier` all
/// fail with `UnauthorizedVerifier`.
pub fn verify_supplier<L: RecordLedger>(
    ledger: &mut L,
    verifier: &Address,
    credential_slot: &Address,
    supplier_slot: &Address,
) -> ProgramResult {
    let granted = ledger
        .read(credential_slot, |bytes| {
            load::<VerifierCredential>(bytes).is_ok_and(|credential| credential.grants(verifier))
        })?
        .unwrap_or(false);
    if !granted || !ledger.caller_signed(verifier) {
        return Err(RetailError::UnauthorizedVerifier.into());
    }

    let mut supplier = load_supplier(ledger, supplier_slot)?;
    if supplier.is_verified() {
        return Ok(());
    }
    supplier.mark_verified();
    ledger.write(supplier_slot, supplier.as_bytes())
}

/// Lists a catalog entry under a verified supplier and bumps the supplier's catalog counter.
///
/// Like adding a product to a store, both records are built before anything is allocated.
pub fn add_supplier_product<L: RecordLedger>(
    ledger: &mut L,
    authority: &Address,
    supplier_slot: &Address,
    entry_slot: &Address,
    args: &AddSupplierProductInstructionData,
    created_at: i64,
) -> ProgramResult {
    let entry = SupplierProduct::init(
        supplier_slot,
        args.name,
        args.description,
        args.price,
        args.available_quantity,
        created_at,
    )?;

    let mut supplier = load_supplier(ledger, supplier_slot)?;
    authorize_supplier(ledger, &supplier, authority)?;
    if !supplier.is_verified() {
        return Err(RetailError::VerificationRequired.into());
    }

    if ledger.read(entry_slot, |_| ())?.is_some() {
        return Err(RetailError::AlreadyInitialized.into());
    }

    supplier.try_increment_products_supplied()?;

    ledger.allocate(entry_slot, SupplierProduct::LEN)?;
    ledger.write(entry_slot, entry.as_bytes())?;
    ledger.write(supplier_slot, supplier.as_bytes())
}

#[cfg(test)]
mod tests {
    use pinocchio::{
        error::ProgramError,
        Address,
    };
    use retailchain_interface::{
        error::RetailError,
        state::{
            supplier::SUPPLIER_SIZE,
            supplier_product::SUPPLIER_PRODUCT_SIZE,
            verifier_credential::VERIFIER_CREDENTIAL_SIZE,
            MAX_CERTIFICATION_LEN,
        },
    };

    use super::*;
    use crate::ledger::memory_ledger::MemoryLedger;

    const AUTHORITY: Address = Address::new_from_array([1u8; 32]);
    const SUPPLIER: Address = Address::new_from_array([2u8; 32]);
    const ENTRY: Address = Address::new_from_array([3u8; 32]);
    const VERIFIER: Address = Address::new_from_array([4u8; 32]);
    const CREDENTIAL: Address = Address::new_from_array([5u8; 32]);
    const INTRUDER: Address = Address::new_from_array([9u8; 32]);
    const NOW: i64 = 1_700_000_000;

    const TEST_SUPPLIER: RegisterSupplierInstructionData<'static> =
        RegisterSupplierInstructionData {
            name: "Acme Farms",
            certification: "USDA Organic",
            description: "Grain and pulses",
        };

    const TEST_ENTRY: AddSupplierProductInstructionData<'static> =
        AddSupplierProductInstructionData {
            name: "Oats",
            description: "25kg sacks",
            price: 40,
            available_quantity: 1_000,
        };

    const TEST_VERIFIER: RegisterVerifierInstructionData<'static> =
        RegisterVerifierInstructionData {
            verification_level: 2,
            organization: "Food Safety Board",
        };

    fn ledger_with_supplier() -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        ledger.set_signers(&[AUTHORITY]);
        register_supplier(&mut ledger, &AUTHORITY, &SUPPLIER, &TEST_SUPPLIER, NOW).unwrap();
        ledger
    }

    fn ledger_with_verified_supplier() -> MemoryLedger {
        let mut ledger = ledger_with_supplier();
        ledger.set_signers(&[VERIFIER]);
        register_verifier(&mut ledger, &VERIFIER, &CREDENTIAL, &TEST_VERIFIER).unwrap();
        verify_supplier(&mut ledger, &VERIFIER, &CREDENTIAL, &SUPPLIER).unwrap();
        ledger.set_signers(&[AUTHORITY]);
        ledger
    }

    #[test]
    fn register_verify_list_scenario() {
        let mut ledger = ledger_with_verified_supplier();
        add_supplier_product(&mut ledger, &AUTHORITY, &SUPPLIER, &ENTRY, &TEST_ENTRY, NOW).unwrap();

        let supplier = load_supplier(&ledger, &SUPPLIER).unwrap();
        assert!(supplier.is_verified());
        assert_eq!(supplier.products_supplied(), 1);
        assert_eq!(supplier.created_at(), NOW);

        let entry = ledger
            .read(&ENTRY, |bytes| load::<SupplierProduct>(bytes).cloned())
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(entry.supplier, SUPPLIER);
        assert_eq!(entry.name, "Oats");
        assert_eq!(entry.price(), 40);
        assert_eq!(entry.available_quantity(), 1_000);
        assert_eq!(ledger.record(&ENTRY).map(<[u8]>::len), Some(SUPPLIER_PRODUCT_SIZE));
    }

    #[test]
    fn unsigned_or_duplicate_registration_fails() {
        let mut ledger = MemoryLedger::new();
        assert_eq!(
            ledger.transact(|ledger| {
                register_supplier(ledger, &AUTHORITY, &SUPPLIER, &TEST_SUPPLIER, NOW)
            }),
            Err(ProgramError::from(RetailError::Unauthorized))
        );
        assert!(ledger.is_empty());

        let mut ledger = ledger_with_supplier();
        assert_eq!(
            register_supplier(&mut ledger, &AUTHORITY, &SUPPLIER, &TEST_SUPPLIER, NOW),
            Err(ProgramError::from(RetailError::AlreadyInitialized))
        );
        assert_eq!(ledger.record(&SUPPLIER).map(<[u8]>::len), Some(SUPPLIER_SIZE));
    }

    #[test]
    fn update_is_limited_to_the_authority() {
        let mut ledger = ledger_with_supplier();
        let update = UpdateSupplierInstructionData {
            certification: Some("ISO 22000"),
            description: None,
        };

        ledger.set_signers(&[INTRUDER]);
        assert_eq!(
            ledger.transact(|ledger| update_supplier(ledger, &INTRUDER, &SUPPLIER, &update)),
            Err(ProgramError::from(RetailError::Unauthorized))
        );

        ledger.set_signers(&[AUTHORITY]);
        update_supplier(&mut ledger, &AUTHORITY, &SUPPLIER, &update).unwrap();
        let supplier = load_supplier(&ledger, &SUPPLIER).unwrap();
        assert_eq!(supplier.certification, "ISO 22000");
        assert_eq!(supplier.description, "Grain and pulses");

        assert_eq!(
            update_supplier(&mut ledger, &AUTHORITY, &ENTRY, &update),
            Err(ProgramError::from(RetailError::SupplierNotFound))
        );
    }

    #[test]
    fn overlong_update_changes_nothing() {
        let mut ledger = ledger_with_supplier();
        let overlong = [b'c'; MAX_CERTIFICATION_LEN + 1];
        let update = UpdateSupplierInstructionData {
            certification: Some(core::str::from_utf8(&overlong).unwrap()),
            description: Some("new"),
        };
        let before = load_supplier(&ledger, &SUPPLIER).unwrap();

        assert_eq!(
            ledger.transact(|ledger| update_supplier(ledger, &AUTHORITY, &SUPPLIER, &update)),
            Err(ProgramError::from(RetailError::FieldTooLong))
        );
        assert_eq!(load_supplier(&ledger, &SUPPLIER).unwrap(), before);
    }

    #[test]
    fn only_a_credential_holder_can_verify() {
        let mut ledger = ledger_with_supplier();
        ledger.set_signers(&[VERIFIER, INTRUDER]);
        register_verifier(&mut ledger, &VERIFIER, &CREDENTIAL, &TEST_VERIFIER).unwrap();

        // Someone else's credential.
        assert_eq!(
            ledger.transact(|ledger| verify_supplier(ledger, &INTRUDER, &CREDENTIAL, &SUPPLIER)),
            Err(ProgramError::from(RetailError::UnauthorizedVerifier))
        );
        // A supplier record is not a credential.
        assert_eq!(
            ledger.transact(|ledger| verify_supplier(ledger, &AUTHORITY, &SUPPLIER, &SUPPLIER)),
            Err(ProgramError::from(RetailError::UnauthorizedVerifier))
        );
        // The holder didn't sign.
        ledger.set_signers(&[]);
        assert_eq!(
            ledger.transact(|ledger| verify_supplier(ledger, &VERIFIER, &CREDENTIAL, &SUPPLIER)),
            Err(ProgramError::from(RetailError::UnauthorizedVerifier))
        );
        assert!(!load_supplier(&ledger, &SUPPLIER).unwrap().is_verified());

        ledger.set_signers(&[VERIFIER]);
        assert_eq!(
            verify_supplier(&mut ledger, &VERIFIER, &CREDENTIAL, &ENTRY),
            Err(ProgramError::from(RetailError::SupplierNotFound))
        );
        verify_supplier(&mut ledger, &VERIFIER, &CREDENTIAL, &SUPPLIER).unwrap();
        verify_supplier(&mut ledger, &VERIFIER, &CREDENTIAL, &SUPPLIER).unwrap();
        assert!(load_supplier(&ledger, &SUPPLIER).unwrap().is_verified());
    }

    #[test]
    fn unverified_supplier_cannot_list() {
        let mut ledger = ledger_with_supplier();
        assert_eq!(
            ledger.transact(|ledger| {
                add_supplier_product(ledger, &AUTHORITY, &SUPPLIER, &ENTRY, &TEST_ENTRY, NOW)
            }),
            Err(ProgramError::from(RetailError::VerificationRequired))
        );
        assert_eq!(ledger.record(&ENTRY), None);
        assert_eq!(load_supplier(&ledger, &SUPPLIER).unwrap().products_supplied(), 0);
    }

    #[test]
    fn listing_checks_authority_before_verification() {
        let mut ledger = ledger_with_supplier();
        ledger.set_signers(&[INTRUDER]);
        assert_eq!(
            ledger.transact(|ledger| {
                add_supplier_product(ledger, &INTRUDER, &SUPPLIER, &ENTRY, &TEST_ENTRY, NOW)
            }),
            Err(ProgramError::from(RetailError::Unauthorized))
        );
        assert_eq!(
            ledger.transact(|ledger| {
                add_supplier_product(ledger, &AUTHORITY, &ENTRY, &ENTRY, &TEST_ENTRY, NOW)
            }),
            Err(ProgramError::from(RetailError::SupplierNotFound))
        );
    }

    #[test]
    fn storage_full_leaves_the_counter_alone() {
        let mut tight = MemoryLedger::with_space_budget(SUPPLIER_SIZE + VERIFIER_CREDENTIAL_SIZE);
        tight.set_signers(&[AUTHORITY]);
        register_supplier(&mut tight, &AUTHORITY, &SUPPLIER, &TEST_SUPPLIER, NOW).unwrap();
        tight.set_signers(&[VERIFIER]);
        register_verifier(&mut tight, &VERIFIER, &CREDENTIAL, &TEST_VERIFIER).unwrap();
        verify_supplier(&mut tight, &VERIFIER, &CREDENTIAL, &SUPPLIER).unwrap();
        tight.set_signers(&[AUTHORITY]);

        assert_eq!(
            tight.transact(|ledger| {
                add_supplier_product(ledger, &AUTHORITY, &SUPPLIER, &ENTRY, &TEST_ENTRY, NOW)
            }),
            Err(ProgramError::from(RetailError::StorageFull))
        );
        assert_eq!(tight.record(&ENTRY), None);
        assert_eq!(load_supplier(&tight, &SUPPLIER).unwrap().products_supplied(), 0);
    }
}
