mod admin_login;
mod admin_session;

pub use admin_login::{__path_admin_login_handler, admin_login_handler, AdminLoginRequestDto};
pub use admin_session::{
    __path_admin_session_handler, admin_session_handler, AdminSessionResponse,
};
