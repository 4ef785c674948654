// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates connection initialization, migration execution and
//! `PRAGMA` configuration. Blob reads and writes use Diesel DSL and live in
//! the store modules.

pub mod sqlite;
