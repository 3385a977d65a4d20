use solid_common::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullTimeContract {
    salary: Amount,
}

impl FullTimeContract {
    pub fn new(salary: Amount) -> Self {
        Self { salary }
    }

    pub fn salary(&self) -> Amount {
        self.salary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartTimeContract {
    salary: Amount,
}

impl PartTimeContract {
    pub fn new(salary: Amount) -> Self {
        Self { salary }
    }

    pub fn salary(&self) -> Amount {
        self.salary
    }
}

/// Paid per engagement rather than salaried, hence `payment` instead of `salary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contractor {
    payment: Amount,
}

impl Contractor {
    pub fn new(payment: Amount) -> Self {
        Self { payment }
    }

    pub fn payment(&self) -> Amount {
        self.payment
    }
}
