//! Job-application tracking API.
//!
//! Server side: JWT issuance and verification, the request authentication
//! gate and the CRUD domains behind it. Client side ([`client`]): the session
//! bookkeeping a browser front end runs against the same tokens.

pub mod client;
pub mod domains;
pub mod openapi;
pub mod routes;
pub mod shared;
