/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Amazon Relational Database Service (Amazon RDS) request and response shapes.
//!
//! Every operation has an input shape in [`input`] and, where modeled, an output shape in
//! [`output`]. Shapes shared between operations live in [`model`], together with the string
//! enumerations of the API.
//!
//! ```
//! use rds::input::DescribeDbClustersInput;
//! use rds::{Config, QueryRequest, Region};
//!
//! let input = DescribeDbClustersInput::builder()
//!     .db_cluster_identifier("my-cluster")
//!     .max_records(20)
//!     .build();
//! let config = Config::builder().region(Region::from_static("us-east-1")).build();
//! let request = input.to_http_request(&config).unwrap();
//! assert_eq!(request.uri(), "https://rds.us-east-1.amazonaws.com/");
//! assert_eq!(
//!     request.body().as_ref(),
//!     &b"Action=DescribeDBClusters&Version=2014-10-31&DBClusterIdentifier=my-cluster&MaxRecords=20"[..]
//! );
//! ```

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod input;
pub mod model;
mod operation;
pub mod output;
pub mod protocol;

pub use config::{Config, Region};
pub use error::{BuildError, ResponseError};
pub use protocol::{QueryRequest, QueryResponse};
pub use smithy_types::{DateTime, ErrorMetadata, InvalidEnumValue};
