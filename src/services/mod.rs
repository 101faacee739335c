pub(crate) mod analysis_service;
