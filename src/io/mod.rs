// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: document codec and files, remote services, and the
//! video player.

pub mod codec;
pub mod player;
pub mod remote;
pub mod serialization;
