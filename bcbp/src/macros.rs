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

/// Parses ASCII digits into an unsigned integer and returns a `Result`.
///
/// Signs, spaces and an empty slice are not a number.
macro_rules! parse_numeric {
    ($t:ty, $b:expr) => {{
        let bytes: &[u8] = &$b[..];
        if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) {
            Ok(bytes
                .iter()
                .fold(0 as $t, |acc, &byte| acc * 10 + (byte & 0x0F) as $t))
        } else {
            Err($crate::Error::validation($crate::error::Violation::NotANumber {
                bytes: bytes.to_vec(),
            }))
        }
    }};
}

/// Implements `Serialize` by serializing the field's string.
///
/// The generics of the implementation are given in brackets, e.g.
/// `serialize_as_str!([<'a>] FlightNumber<'a>)`.
#[cfg(feature = "serde")]
macro_rules! serialize_as_str {
    ($([$($generics:tt)*] $t:ty),+ $(,)?) => {
        $(
            impl $($generics)* serde::Serialize for $t {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }
        )+
    };
}
