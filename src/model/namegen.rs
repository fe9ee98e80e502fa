// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::Rng;

use super::graph::Graph;

const CITY_NAME_PREFIX: &str = "city-";
const CITY_NAME_SUFFIX_LEN: usize = 5;

/// Generates a fresh `city-xxxxx` label that no node in `graph` carries yet.
///
/// The suffix is five random base-36 characters; on collision the generator
/// simply retries, so uniqueness among labels is guaranteed on return.
pub fn gen_city_name<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> String {
    loop {
        let mut name = String::with_capacity(CITY_NAME_PREFIX.len() + CITY_NAME_SUFFIX_LEN);
        name.push_str(CITY_NAME_PREFIX);
        for _ in 0..CITY_NAME_SUFFIX_LEN {
            let digit = rng.gen_range(0..36);
            name.push(char::from_digit(digit, 36).expect("base-36 digit"));
        }
        if !graph.contains_label(&name) {
            return name;
        }
    }
}
