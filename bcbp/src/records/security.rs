// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::fields::*;
use crate::{Opaque, Section};

/// The security data that closes a boarding pass.
///
/// The data usually is a signature over the preceding bytes. It's kept as is.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Section)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[bcbp(phase = Security)]
pub struct Security<'a> {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub security_marker: SecurityMarker,
    pub security_data_type: SecurityDataType<'a>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub length: FieldSize,
    /// The [`length`](Security::length) bytes following the header.
    #[bcbp(skip)]
    pub data: Opaque<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Fields;
    use crate::Mode;

    #[test]
    fn security_header() {
        let mut fields = Fields::new(b"^160MEYCIQ", Mode::Strict);
        let security: Security = fields.section().expect("header should parse");

        assert_eq!(security.security_data_type.as_str(), "1");
        assert_eq!(security.length.get(), 96);
        assert!(security.data.is_empty());
        assert_eq!(fields.offset(), 4);
    }
}
