use crate::wire::HealthRes;

/// Health service backing the `/health` endpoint.
#[derive(Clone, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as healthy along with the number of clinics it serves.
    pub fn check_health(clinic_count: usize) -> HealthRes {
        HealthRes {
            ok: true,
            message: format!("VetClinic is alive ({clinic_count} clinics)"),
        }
    }
}
