// Vehicle endpoints shared by the main and police consoles.

use tracing::debug;

use crate::client::RegistryClient;
use crate::error::Error;
use crate::models::Vehicle;

impl RegistryClient {
    /// List all vehicles visible to this console.
    ///
    /// `GET /vehicles`
    pub async fn get_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        debug!("listing vehicles");
        self.get("/vehicles").await
    }

    /// Look up a single vehicle by registration number.
    ///
    /// `GET /vehicles/lookup/{reg}`
    pub async fn lookup_vehicle(&self, reg_number: &str) -> Result<Vehicle, Error> {
        debug!(reg_number, "looking up vehicle");
        self.get(&format!("/vehicles/lookup/{reg_number}")).await
    }
}
