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
use crate::Section;

/// The mandatory fields that start a boarding pass.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Section)]
#[bcbp(phase = Header)]
pub struct Header<'a> {
    pub format_code: FormatCode,
    pub number_of_legs: LegCount,
    #[bcbp(class = Printable)]
    pub passenger_name: PassengerName<'a>,
    pub electronic_ticket_indicator: TicketIndicator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Fields;
    use crate::{ErrorKind, Mode};

    #[test]
    fn header() {
        let mut fields = Fields::new(b"M1LEOPOLD/EMR         E", Mode::Strict);
        let header: Header = fields.section().expect("header should parse");

        assert_eq!(header.format_code, FormatCode::Multiple);
        assert_eq!(header.number_of_legs.get(), 1);
        assert_eq!(header.passenger_name.as_str(), "LEOPOLD/EMR");
        assert_eq!(header.electronic_ticket_indicator, TicketIndicator::Electronic);
        assert!(fields.is_at_end());
    }

    #[test]
    fn truncated_name() {
        let mut fields = Fields::new(b"M1LEOPOLD/EM", Mode::Lenient);
        let err = fields.section::<Header>().expect_err("name is cut off");

        assert!(matches!(err.kind(), ErrorKind::InsufficientData { .. }));
        assert_eq!(err.field(), "passenger_name");
        assert_eq!(err.offset(), 2);
    }
}
