pub mod users {
    pub const USER_ID_FIELD: &str = "userid";
    pub const USERNAME_FIELD: &str = "username";
    pub const FIRST_NAME_FIELD: &str = "firstName";
    pub const LAST_NAME_FIELD: &str = "lastName";
    pub const EMAIL_FIELD: &str = "email";
    pub const PHONE_FIELD: &str = "phone";
    pub const STATUS_FIELD: &str = "status";
}


pub mod configurations {
    pub const OWNER_ID_FIELD: &str = "userid";
    pub const ID_FIELD: &str = "id";
    pub const NAME_FIELD: &str = "name";
    pub const VALUE_FIELD: &str = "value";
}

pub mod api {
    pub const AUTHORIZATION_HEADER: &str = "Authorization";
    pub const USER_ID_PATH_PARAM: &str = "userId";
    pub const USERS_PATH_PREFIX: &str = "/users/";
}
