use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::events::{CustomerCreatedEvent, CustomerUpdateAddressEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

/// Wire shape of a customer; deserialization re-checks the entity rules
#[derive(Deserialize)]
struct CustomerRecord {
    id: String,
    name: String,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    reward_points: u64,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = CustomerError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        let mut customer = Self::new(record.id, record.name)?;
        customer.address = record.address;
        customer.reward_points = record.reward_points;
        if record.active {
            customer.activate()?;
        }
        Ok(customer)
    }
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Build a customer and the event announcing it
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(Self, CustomerCreatedEvent), CustomerError> {
        let customer = Self::new(id, name)?;
        let event = CustomerCreatedEvent::new(&customer.id, &customer.name, customer.address.clone());
        Ok((customer, event))
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Set the first address without announcing a change
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Replace the address and return the event describing the change
    pub fn change_address(&mut self, address: Address) -> CustomerUpdateAddressEvent {
        self.address = Some(address.clone());
        CustomerUpdateAddressEvent::new(&self.id, &self.name, address)
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

// ============================================================================
// Tests
// ============================================================================
