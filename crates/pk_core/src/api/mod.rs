pub mod session_json;

pub use session_json::{
    run_session, run_session_json, SessionAction, SessionRequest, SessionResponse,
};
