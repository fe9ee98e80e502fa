// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The city/road network model the commands mutate.

mod graph;
mod ids;
mod namegen;

pub use graph::{Edge, Graph, Node, Position};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use namegen::gen_city_name;
