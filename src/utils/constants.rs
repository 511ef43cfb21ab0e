/// localStorage key holding the bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Id of the mount point in index.html
pub const APP_ROOT_ID: &str = "app";

// Route paths
pub const PATH_HOME: &str = "/";
pub const PATH_LOGIN: &str = "/login";
pub const PATH_PATIENTS: &str = "/patients";
pub const PATH_ADD_PATIENT: &str = "/add-patient";
pub const PATH_PATIENT_PREFIX: &str = "/patient/";
