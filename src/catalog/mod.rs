mod drives;
mod reduction;
mod stripes;

pub(crate) use drives::{DriveCatalog, DriveModel};
pub(crate) use reduction::ReductionTechnique;
pub(crate) use stripes::StripeGeometry;
