// doc constants
pub const DOC_ID: &str = "_id";
pub const EXTERNAL_ID: &str = "id";

// racer fields
pub const FIELD_NUMBER: &str = "number";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_GROUP: &str = "group";
pub const FIELD_SECS: &str = "secs";

/// The only fields a caller may filter, sort or update by.
pub const RACER_FIELDS: [&str; 6] = [
    FIELD_NUMBER,
    FIELD_FIRST_NAME,
    FIELD_LAST_NAME,
    FIELD_GENDER,
    FIELD_GROUP,
    FIELD_SECS,
];

// store constants
pub const RACER_COLLECTION: &str = "racers";

// pagination constants
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "per_page";
pub const PARAM_SORT: &str = "sort";
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 30;

// object id constants
pub const OBJECT_ID_LEN: usize = 12;
pub const OBJECT_ID_HEX_LEN: usize = 24;
