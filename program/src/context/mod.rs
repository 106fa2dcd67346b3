pub mod add_product_context;
pub mod add_supplier_product_context;
pub mod initialize_store_context;
pub mod register_supplier_context;
pub mod register_verifier_context;
pub mod update_product_context;
pub mod update_supplier_context;
pub mod verify_supplier_context;
