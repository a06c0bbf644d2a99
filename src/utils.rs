use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub fn new() -> SuccessBody {
        SuccessBody { success: true }
    }
}
