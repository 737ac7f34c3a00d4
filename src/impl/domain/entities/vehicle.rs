#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: Option<u64>,
    pub vin: String,
    /// Individual cost. Only meaningful for itemized receipts.
    pub cost: Option<f64>,
}

impl Vehicle {
    /// One-line description, ex. "2021 Toyota Camry • VIN: 1HGCM82633A004352".
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} • VIN: {}",
            self.year, self.make, self.model, self.vin
        )
    }
}
