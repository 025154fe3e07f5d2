// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

mod boarding_pass;
mod conditional;
mod header;
mod leg;
mod security;

pub use boarding_pass::BoardingPass;
pub use conditional::{RepeatedConditional, UniqueConditional, VersionHeader};
pub use header::Header;
pub use leg::FlightLeg;
pub use security::Security;
