// Copyright 2023 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! Error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input rejected before any computation, e.g. an empty configuration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Random placement of atoms gave up
    #[error("Initialization failed: {0}")]
    Initialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
