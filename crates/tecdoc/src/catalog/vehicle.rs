//! Vehicles and vehicle models.

use crate::catalog::operations::{VEHICLES_BY_IDS, VEHICLE_MODELS};
use crate::client::Client;
use crate::error::Result;
use crate::model::{CanonicalRecord, Id, Params, Scope};
use crate::util::YearMonth;

/// A vehicle (linking target of type "C").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vehicle {
    pub id: Id,
    /// Type designation, e.g. "1.6 16V".
    pub name: String,
    pub manufacturer_name: String,
    pub model_name: String,
    pub date_of_construction_from: Option<YearMonth>,
    pub date_of_construction_to: Option<YearMonth>,
    pub power_kw: i64,
    pub power_hp: i64,
    /// Cylinder capacity in ccm.
    pub cylinder_capacity: i64,
}

impl Vehicle {
    /// Builds a vehicle from a `get_vehicle_by_ids_2` record.
    ///
    /// Details are read from the nested `vehicle_details` record when the
    /// service sends one, otherwise from the record itself.
    pub fn from_record(record: &CanonicalRecord) -> Self {
        let details = record.record("vehicle_details").unwrap_or(record);
        let id = match record.int("car_id") {
            0 => details.int("car_id"),
            id => id,
        };
        Self {
            id,
            name: details.string("type_name"),
            manufacturer_name: details.string("manu_name"),
            model_name: details.string("model_name"),
            date_of_construction_from: details.year_month("year_of_constr_from"),
            date_of_construction_to: details.year_month("year_of_constr_to"),
            power_kw: details.int("power_kw_from"),
            power_hp: details.int("power_hp_from"),
            cylinder_capacity: details.int("ccm_tech"),
        }
    }

    /// Fetches vehicles by id, batching long id lists.
    ///
    /// Results follow the order of `ids`; duplicates are not removed.
    pub fn by_ids(client: &Client, scope: &Scope, ids: &[Id]) -> Result<Vec<Vehicle>> {
        let template = scope
            .params()
            .with("country_user_setting", scope.country.as_str())
            .with("countries_car_selection", scope.country.as_str());
        let records = client.fetch_by_ids(VEHICLES_BY_IDS, ids, &template, "car_ids")?;
        Ok(records.iter().map(Vehicle::from_record).collect())
    }
}

/// Vehicle type filter used by model and manufacturer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CarType {
    #[default]
    PassengerCar = 1,
    CommercialVehicle = 2,
    LightCommercial = 3,
}

/// Options for [`VehicleModel::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleModelQuery {
    pub manu_id: Id,
    pub car_type: CarType,
    /// ISO 3166 country code for vehicle selection.
    pub countries_car_selection: String,
    pub country_group_flag: bool,
    /// Simplified vehicle selection.
    pub eval_favor: bool,
    /// With `eval_favor`: 1 for the first list selection, 0 for the rest.
    pub favoured_list: Option<i64>,
    /// ISO 639 language code.
    pub lang: String,
}

impl VehicleModelQuery {
    pub fn new(manu_id: Id, lang: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            manu_id,
            car_type: CarType::default(),
            countries_car_selection: country.into(),
            country_group_flag: false,
            eval_favor: false,
            favoured_list: None,
            lang: lang.into(),
        }
    }

    pub fn params(&self) -> Params {
        Params::new()
            .with("car_type", self.car_type as u8)
            .with("countries_car_selection", self.countries_car_selection.as_str())
            .with("country_group_flag", self.country_group_flag)
            .with("eval_favor", self.eval_favor)
            .with_opt("favoured_list", self.favoured_list)
            .with("lang", self.lang.as_str())
            .with("manu_id", self.manu_id)
    }
}

/// A vehicle model of one manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleModel {
    pub id: Id,
    pub name: String,
    pub date_of_construction_from: Option<YearMonth>,
    pub date_of_construction_to: Option<YearMonth>,
}

impl VehicleModel {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("model_id"),
            name: record.string("modelname"),
            date_of_construction_from: record.year_month("year_of_constr_from"),
            date_of_construction_to: record.year_month("year_of_constr_to"),
        }
    }

    /// Lists the models of a manufacturer.
    pub fn all(client: &Client, query: &VehicleModelQuery) -> Result<Vec<VehicleModel>> {
        let records = client.execute(VEHICLE_MODELS, query.params())?;
        Ok(records.iter().map(VehicleModel::from_record).collect())
    }
}
