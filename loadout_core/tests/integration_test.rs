//! Integration test: Load catalog -> Resolve -> Simulate -> Rank
//!
//! Walks the full query path against the bundled catalog, then checks the
//! headline scenarios on small hand-built catalogs.

use loadout_core::catalog::{
    AttackPattern, BaseStats, Catalog, CatalogSource, ChampionDefinition, DamageFormula,
    ItemDefinition, ProcEffect, ProcPayload, ProcTrigger, StatGrowth,
};
use loadout_core::damage::DamageSource;
use loadout_core::defense::TargetProfile;
use loadout_core::rotation::collect_procs;
use loadout_core::stat_block::ResolveOptions;
use loadout_core::{
    default_catalog, evaluate_build, resolve, simulate, top_builds, BuildError, BuildQuery,
    DamageType, ObjectiveMode, RankedResult, SearchMode, SimulationConfig, StatKind, TargetSpec,
};
use std::sync::Arc;
use std::thread;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a ranking
fn print_results(results: &[RankedResult]) {
    for (rank, result) in results.iter().enumerate() {
        println!(
            "  #{} {:>8.1} dmg  {:>5}g  [{}]",
            rank + 1,
            result.score,
            result.cost,
            result.items.join(", ")
        );
    }
}

fn brawler(attack_damage: f64, attack_speed: f64) -> ChampionDefinition {
    ChampionDefinition {
        id: "brawler".to_string(),
        name: "Brawler".to_string(),
        role: "fighter".to_string(),
        base_stats: BaseStats {
            attack_damage: StatGrowth::new(attack_damage, 0.0),
            attack_speed: StatGrowth::new(attack_speed, 0.0),
            health: StatGrowth::new(600.0, 90.0),
            ..Default::default()
        },
        attack: AttackPattern::default(),
        abilities: Vec::new(),
        combo: Vec::new(),
    }
}

#[test]
fn test_full_catalog_to_ranking_flow() {
    separator("INTEGRATION TEST: Catalog -> Resolve -> Simulate -> Rank");

    // =========================================================================
    // STEP 1: Load the bundled catalog
    // =========================================================================
    separator("STEP 1: Loading Catalog");

    let catalog = default_catalog().expect("bundled catalog should load");
    println!("  Catalog version: {}", catalog.version());
    println!("  Loaded {} champions", catalog.champions().len());
    println!("  Loaded {} items", catalog.items().len());
    println!("  Loaded {} runes", catalog.runes().len());

    let ahri = catalog.champion("Ahri").expect("Ahri should exist");
    println!("  Champion: {}", ahri.label());

    // =========================================================================
    // STEP 2: Resolve a build
    // =========================================================================
    separator("STEP 2: Resolving Luden's + Rabadon's at level 11");

    let ludens = catalog.item("ludens_tempest").unwrap();
    let cap = catalog.item("rabadons_deathcap").unwrap();
    let stats = resolve(ahri, 11, &[ludens, cap], None, &ResolveOptions::default()).unwrap();

    println!("  Ability Power: {:.1}", stats.get(StatKind::AbilityPower));
    println!("  Ability Haste: {:.1}", stats.get(StatKind::AbilityHaste));
    println!("  Attack Speed: {:.3}", stats.get(StatKind::AttackSpeed));
    // (80 + 120) × 1.35
    assert!((stats.get(StatKind::AbilityPower) - 270.0).abs() < 1e-9);
    assert!((stats.get(StatKind::AbilityHaste) - 20.0).abs() < 1e-9);

    // =========================================================================
    // STEP 3: Simulate a burst window
    // =========================================================================
    separator("STEP 3: Simulating burst vs squishy");

    let procs = collect_procs(&[ludens, cap], None);
    let timeline = simulate(ahri, &stats, &procs, &TargetProfile::squishy(), &SimulationConfig::default()).unwrap();

    for total in timeline.by_source() {
        println!(
            "  {:<24} {:>2} events  {:>7.1} raw  {:>7.1} dealt",
            total.source.to_string(),
            total.events,
            total.raw,
            total.mitigated
        );
    }
    println!("  Total: {:.1}", timeline.total_mitigated());
    assert!(!timeline.is_empty());
    assert!(!timeline.truncated);
    assert!(timeline.events().windows(2).all(|w| w[0].time <= w[1].time));
    assert!(timeline
        .events()
        .iter()
        .any(|e| matches!(&e.source, DamageSource::Proc { proc_id, .. } if proc_id == "echo")));

    // =========================================================================
    // STEP 4: Rank burst builds
    // =========================================================================
    separator("STEP 4: Ranking burst builds vs tank");

    let query = BuildQuery::new("ahri", 11, ObjectiveMode::Burst, TargetSpec::Tank)
        .with_limit(5)
        .with_item_range(1, 3);
    let results = top_builds(&catalog, &query).unwrap();
    print_results(&results);

    assert_eq!(results.len(), 5);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    for result in &results {
        let held: Vec<&str> = result.items.iter().map(String::as_str).collect();
        let again = evaluate_build(&catalog, &query, &held).unwrap();
        assert_eq!(again.score, result.score);
    }

    // =========================================================================
    // STEP 5: Rank sustained builds
    // =========================================================================
    separator("STEP 5: Ranking dot builds for Cassiopeia");

    let query = BuildQuery::new("Cassiopeia", 13, ObjectiveMode::Dot, TargetSpec::Tank)
        .with_limit(3)
        .with_item_range(1, 2)
        .keep_timelines();
    let results = top_builds(&catalog, &query).unwrap();
    print_results(&results);

    let best = &results[0];
    let timeline = best.timeline.as_ref().expect("timelines were requested");
    let ticks = timeline
        .events()
        .iter()
        .filter(|e| matches!(e.source, DamageSource::DotTick { .. }))
        .count();
    println!("  DoT ticks in best build: {}", ticks);
    assert!(ticks > 0);
    assert!(timeline.events().iter().all(|e| e.time <= 15.0));

    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"items\""));

    separator("INTEGRATION TEST COMPLETE");
}

#[test]
fn test_auto_attack_against_armor() {
    let champion = brawler(60.0, 0.5);
    let catalog = Catalog::new(1, vec![champion], Vec::new(), Vec::new()).unwrap();

    let target = TargetProfile {
        name: "dummy".to_string(),
        health: 2000.0,
        armor: 30.0,
        magic_resist: 0.0,
        damage_reduction: Default::default(),
    };
    let query = BuildQuery::new("brawler", 1, ObjectiveMode::Burst, TargetSpec::Custom(target));
    let result = evaluate_build(&catalog, &query, &[]).unwrap();

    let first = &result.timeline.as_ref().unwrap().events()[0];
    assert_eq!(first.source, DamageSource::AutoAttack);
    assert!((first.raw - 60.0).abs() < 1e-9);
    assert!((first.mitigated - 46.1538).abs() < 1e-3);
}

#[test]
fn test_budget_limits_combinations() {
    let catalog = Catalog::new(
        1,
        vec![brawler(60.0, 0.8)],
        vec![
            ItemDefinition::new("long_sword", "Long Sword", 1000).with_stat(StatKind::AttackDamage, 10.0),
            ItemDefinition::new("bf_sword", "B. F. Sword", 2500).with_stat(StatKind::AttackDamage, 40.0),
            ItemDefinition::new("dagger", "Dagger", 1000).with_stat(StatKind::AttackSpeed, 0.25),
        ],
        Vec::new(),
    )
    .unwrap();

    let query = BuildQuery::new("brawler", 1, ObjectiveMode::Burst, TargetSpec::Squishy)
        .with_budget(3000)
        .with_limit(10);
    let results = top_builds(&catalog, &query).unwrap();
    print_results(&results);

    assert!(results.iter().all(|r| r.cost <= 3000));
    let mut builds: Vec<Vec<String>> = results.iter().map(|r| r.items.clone()).collect();
    builds.sort();
    assert_eq!(
        builds,
        vec![
            vec!["bf_sword".to_string()],
            vec!["dagger".to_string()],
            vec!["long_sword".to_string()],
            vec!["long_sword".to_string(), "dagger".to_string()],
        ]
    );
}

#[test]
fn test_unknown_champion_before_enumeration() {
    let catalog = default_catalog().unwrap();
    let query = BuildQuery::new("teemo", 11, ObjectiveMode::Burst, TargetSpec::Tank);
    assert_eq!(
        top_builds(&catalog, &query).unwrap_err(),
        BuildError::UnknownChampion("teemo".to_string())
    );
}

#[test]
fn test_limit_zero_returns_empty() {
    let catalog = default_catalog().unwrap();
    let query = BuildQuery::new("ahri", 11, ObjectiveMode::Burst, TargetSpec::Tank).with_limit(0);
    assert!(top_builds(&catalog, &query).unwrap().is_empty());
}

#[test]
fn test_proc_internal_cooldown() {
    let bite = ProcEffect {
        id: "bite".to_string(),
        trigger: ProcTrigger::OnAttack,
        internal_cooldown: 1.0,
        payload: ProcPayload::Hit {
            damage_type: DamageType::Magic,
            damage: DamageFormula::flat(25.0),
        },
    };
    let catalog = Catalog::new(
        1,
        vec![brawler(60.0, 2.0)],
        vec![ItemDefinition::new("fang", "Fang", 1000).with_proc(bite)],
        Vec::new(),
    )
    .unwrap();

    let query = BuildQuery::new("brawler", 1, ObjectiveMode::Burst, TargetSpec::Squishy);
    let result = evaluate_build(&catalog, &query, &["fang"]).unwrap();
    let timeline = result.timeline.unwrap();

    let autos = timeline
        .events()
        .iter()
        .filter(|e| e.source == DamageSource::AutoAttack)
        .count();
    let procs: Vec<f64> = timeline
        .events()
        .iter()
        .filter(|e| matches!(e.source, DamageSource::Proc { .. }))
        .map(|e| e.time)
        .collect();

    println!("  {} autos, procs at {:?}", autos, procs);
    assert_eq!(autos, 7);
    assert_eq!(procs.len(), 4);
    assert!(procs.windows(2).all(|w| w[1] - w[0] >= 1.0 - 1e-9));
}

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(default_catalog().unwrap());
    let query = BuildQuery::new("caitlyn", 9, ObjectiveMode::Burst, TargetSpec::Squishy)
        .with_limit(3)
        .with_item_range(1, 2)
        .with_search(SearchMode::Exhaustive);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let query = query.clone();
            thread::spawn(move || top_builds(catalog.as_ref(), &query))
        })
        .collect();

    let results: Vec<Vec<RankedResult>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(results[0], results[1]);
}
