// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

/// The different kinds of errors this crate can return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A reserved key (`0`), an out-of-range index, or a malformed seed
    /// array was passed to a public operation.
    InvalidArgument,
    /// A resize could not allocate its new backing buffer. The `Pma`'s
    /// prior state is left untouched.
    AllocationFailed,
}

/// The error type returned by fallible `Pma` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub(crate) fn new<S: AsRef<str>>(kind: ErrorKind, message: S) -> Self {
        Error {
            kind,
            message: message.as_ref().to_string(),
        }
    }

    pub(crate) fn invalid_argument<S: AsRef<str>>(message: S) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub(crate) fn allocation_failed() -> Self {
        Self::new(ErrorKind::AllocationFailed, "failed to allocate backing buffer")
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pma {:?} error: {}", self.kind, &self.message)
    }
}

impl std::error::Error for Error {}

pub(crate) type Result<T> = std::result::Result<T, Error>;
