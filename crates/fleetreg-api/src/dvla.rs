// DVLA registry endpoints: vehicle records, renewals, fines, analytics.

use serde_json::json;
use tracing::debug;

use crate::client::RegistryClient;
use crate::error::Error;
use crate::models::{ActionOutcome, DvlaAnalytics, Fine, NewVehicle, Renewal, Vehicle};

impl RegistryClient {
    /// List the DVLA vehicle registry.
    ///
    /// `GET /dvla/vehicles`
    pub async fn get_dvla_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        debug!("listing DVLA vehicles");
        self.get("/dvla/vehicles").await
    }

    /// Create a vehicle record.
    ///
    /// `POST /dvla/vehicles`
    pub async fn create_dvla_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, Error> {
        debug!(reg_number = %vehicle.reg_number, "creating DVLA vehicle");
        self.post("/dvla/vehicles", vehicle).await
    }

    /// Replace a vehicle record.
    ///
    /// `PUT /dvla/vehicles/{id}`
    pub async fn update_dvla_vehicle(
        &self,
        id: i64,
        vehicle: &NewVehicle,
    ) -> Result<Vehicle, Error> {
        debug!(id, reg_number = %vehicle.reg_number, "updating DVLA vehicle");
        self.put(&format!("/dvla/vehicles/{id}"), vehicle).await
    }

    /// Delete a vehicle record.
    ///
    /// `DELETE /dvla/vehicles/{id}`
    pub async fn delete_dvla_vehicle(&self, id: i64) -> Result<ActionOutcome, Error> {
        debug!(id, "deleting DVLA vehicle");
        self.delete(&format!("/dvla/vehicles/{id}")).await
    }

    /// Submit a registration renewal.
    ///
    /// `POST /dvla/renewals`
    pub async fn create_dvla_renewal(
        &self,
        reg_number: &str,
        duration_months: u32,
    ) -> Result<Renewal, Error> {
        debug!(reg_number, duration_months, "submitting renewal");
        let body = json!({
            "reg_number": reg_number,
            "duration_months": duration_months,
        });
        self.post("/dvla/renewals", &body).await
    }

    /// List fines held against registered vehicles.
    ///
    /// `GET /dvla/fines`
    pub async fn get_dvla_fines(&self) -> Result<Vec<Fine>, Error> {
        debug!("listing DVLA fines");
        self.get("/dvla/fines").await
    }

    /// Mark a fine as cleared.
    ///
    /// `POST /dvla/fines/{id}/clear`
    pub async fn clear_dvla_fine(&self, id: i64) -> Result<ActionOutcome, Error> {
        debug!(id, "clearing fine");
        self.post_empty(&format!("/dvla/fines/{id}/clear")).await
    }

    /// Registry-wide analytics for the DVLA dashboard.
    ///
    /// `GET /dvla/analytics`
    pub async fn get_dvla_analytics(&self) -> Result<DvlaAnalytics, Error> {
        debug!("fetching DVLA analytics");
        self.get("/dvla/analytics").await
    }
}
