//! Read-only query surfaces crossing the registry / verification-ledger boundary.
//!
//! Neither engine owns the other. The registry asks "does this voter hold a
//! profile?", the verification ledger asks "is this employer trusted?", and
//! nothing mutating ever crosses.

use std::collections::{BTreeSet, HashSet};

use veri_types::Address;

/// Answers whether an address holds an employee profile (vote eligibility).
pub trait ProfileDirectory {
    fn has_profile(&self, account: &Address) -> bool;
}

/// Answers whether an employer has been admitted to the trusted set.
pub trait TrustDirectory {
    fn is_trusted(&self, employer: &Address) -> bool;
}

impl ProfileDirectory for HashSet<Address> {
    fn has_profile(&self, account: &Address) -> bool {
        self.contains(account)
    }
}

impl TrustDirectory for HashSet<Address> {
    fn is_trusted(&self, employer: &Address) -> bool {
        self.contains(employer)
    }
}

impl TrustDirectory for BTreeSet<Address> {
    fn is_trusted(&self, employer: &Address) -> bool {
        self.contains(employer)
    }
}
