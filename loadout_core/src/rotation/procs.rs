//! Proc bindings - Item and rune procs equipped for a run

use crate::catalog::{ItemDefinition, ProcEffect, RuneDefinition};

/// A proc effect together with the item or rune that carries it
#[derive(Debug, Clone, Copy)]
pub struct ProcBinding<'a> {
    /// Id of the owning item or rune
    pub owner: &'a str,
    pub effect: &'a ProcEffect,
}

impl ProcBinding<'_> {
    /// DoT source key and timeline label for this proc
    pub fn source_key(&self) -> String {
        format!("{}:{}", self.owner, self.effect.id)
    }
}

/// Collect procs of the equipped items (in candidate order), then the rune
pub fn collect_procs<'a>(
    items: &[&'a ItemDefinition],
    rune: Option<&'a RuneDefinition>,
) -> Vec<ProcBinding<'a>> {
    let item_procs = items.iter().copied().flat_map(|item| {
        item.procs.iter().map(move |effect| ProcBinding {
            owner: item.id.as_str(),
            effect,
        })
    });
    let rune_procs = rune.into_iter().flat_map(|rune| {
        rune.procs.iter().map(move |effect| ProcBinding {
            owner: rune.id.as_str(),
            effect,
        })
    });
    item_procs.chain(rune_procs).collect()
}
