// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCode {
    // Client-side errors (10000–10999)
    InvalidParameter = 10000,
    MissingConfiguration = 10020,
    ConfigFileInvalid = 10030,

    // Authentication and authorization errors (20000–20999)
    TokenAcquisitionFailed = 20010,

    // Network connection errors (40000–40999)
    NetworkError = 40000,
    HttpResponseError = 40030,

    // Remote API errors (50000–50999)
    GraphApiCallFailed = 50000,
    EmptySourceMailbox = 50010,
    EmptyDestinationGroup = 50020,

    // Internal system errors (70000–70999)
    InternalError = 70000,
}
