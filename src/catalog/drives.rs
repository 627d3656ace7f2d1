use serde::Serialize;

/// A flash drive model and the capacity it contributes after formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DriveModel {
    pub(crate) id: String,
    /// Usable capacity in GiB (vendor GB from the maintenance manual, converted).
    pub(crate) effective_capacity_gib: f64,
}

impl DriveModel {
    pub(crate) fn new(id: impl Into<String>, effective_capacity_gib: f64) -> Self {
        Self { id: id.into(), effective_capacity_gib }
    }
}

/// Ordered, read-only table of supported drive models.
///
/// Order matters: the sweep report enumerates models in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub(crate) struct DriveCatalog {
    models: Vec<DriveModel>,
}

impl DriveCatalog {
    pub(crate) const fn new(models: Vec<DriveModel>) -> Self {
        Self { models }
    }

    /// The SSD models shipped with the array today.
    pub(crate) fn builtin() -> Self {
        Self::new(vec![
            DriveModel::new("3.8TB-SSD", 3521.26),
            DriveModel::new("7.6TB-SSD", 7042.52),
            DriveModel::new("15TB-SSD", 14015.00),
            DriveModel::new("30TB-SSD", 28028.99),
            DriveModel::new("60TB-SSD", 56058.00),
        ])
    }

    pub(crate) fn get(&self, id: &str) -> Option<&DriveModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DriveModel> {
        self.models.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.models.len()
    }
}
