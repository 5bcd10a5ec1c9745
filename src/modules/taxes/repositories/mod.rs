mod tax_store;

pub use tax_store::{MySqlTaxStore, TaxStore};
