// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the Kluster CRD manifest: `crd-gen | kubectl apply -f -`

use kluster_operator::types::kluster::kluster_crd_yaml;

fn main() -> anyhow::Result<()> {
    print!("{}", kluster_crd_yaml()?);
    Ok(())
}
