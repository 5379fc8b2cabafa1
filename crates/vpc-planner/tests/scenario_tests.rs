//! End-to-end planning scenarios
//!
//! Drives the planner through strategy selection, placement, preview and
//! confirmation with scripted operator decisions.

use std::net::Ipv4Addr;
use vpc_planner::{
    Error, PlacementSession, PlannerConfig, ScriptedOperator, SessionState, Step, Strategy,
    StrategyCatalog, Tier, Vpc, overlaps, plan_interactively, validate_start,
};

fn config() -> PlannerConfig {
    PlannerConfig::default()
}

fn vpc(cidr: &str) -> Vpc {
    Vpc::parse(cidr, &config()).unwrap()
}

fn session_for(cidr: &str, counts: [u32; 3]) -> PlacementSession {
    let vpc = vpc(cidr);
    let option = StrategyCatalog::new(&vpc, &config())
        .available()
        .find(|o| o.strategy == Strategy::from_counts(counts))
        .expect("strategy should fit");
    PlacementSession::new(vpc, option)
}

// ============================================================================
// Scenario A: 10.0.0.0/16, one public and one private subnet
// ============================================================================

#[test]
fn test_scenario_a_two_tiers_in_slash_16() {
    let mut session = session_for("10.0.0.0/16", [1, 1, 0]);
    let plan = *session.block_plan();
    assert_eq!(session.strategy().effective_blocks(), 3);
    assert_eq!(plan.new_prefix_length, 18);
    assert_eq!(plan.block_size, 16384);

    session.accept_default().unwrap();
    assert_eq!(session.default_start().unwrap(), Ipv4Addr::new(10, 0, 128, 0));
    session.accept_default().unwrap();

    let preview = session.preview().unwrap();
    let public = &preview.tiers[0];
    let private = &preview.tiers[1];
    assert_eq!(public.subnets[0].to_string(), "10.0.0.0/18");
    assert_eq!(private.subnets[0].to_string(), "10.0.128.0/18");
    assert!(!overlaps(public, private, plan.block_size));
}

// ============================================================================
// Scenario B: 10.0.0.0/24, one public and one private subnet
// ============================================================================

#[test]
fn test_scenario_b_two_tiers_in_slash_24() {
    let mut operator = ScriptedOperator::new([
        Step::Strategy(0),
        Step::Accept,
        Step::Accept,
        Step::Confirm,
    ]);
    let result = plan_interactively(vpc("10.0.0.0/24"), &config(), &mut operator).unwrap();

    assert_eq!(result.block_plan.mask(), "/26");
    assert_eq!(result.block_plan.usable_per_subnet, 59);
    assert_eq!(result.cidr_strings(Tier::Public), vec!["10.0.0.0/26"]);
    assert_eq!(result.cidr_strings(Tier::Private), vec!["10.0.0.128/26"]);

    let summary = result.summary();
    assert_eq!(summary.total_subnets, 2);
    assert_eq!(summary.usable_ips_per_subnet, 59);
}

// ============================================================================
// Scenario C: misaligned candidate
// ============================================================================

#[test]
fn test_scenario_c_misaligned_candidate() {
    let vpc = vpc("10.0.0.0/26");
    let plan = vpc_planner::BlockPlan {
        new_prefix_length: 26,
        block_size: 64,
        usable_per_subnet: 59,
    };

    let err = validate_start(Ipv4Addr::new(10, 0, 0, 10), &vpc, &plan, 1).unwrap_err();
    assert_eq!(
        err,
        Error::Misaligned {
            candidate: Ipv4Addr::new(10, 0, 0, 10),
            prefix: 26,
            below: Some(Ipv4Addr::new(10, 0, 0, 0)),
            above: None,
        }
    );
    assert!(err.is_recoverable());
}

// ============================================================================
// Scenario D: VPC too small to plan
// ============================================================================

#[test]
fn test_scenario_d_mask_too_small() {
    let err = Vpc::parse("10.0.0.0/28", &config()).unwrap_err();
    assert_eq!(err, Error::MaskTooSmall { prefix: 28, limit: 27 });
}

// ============================================================================
// Scenario E: reject the preview once, then confirm the same defaults
// ============================================================================

#[test]
fn test_scenario_e_reconfigure_matches_single_pass() {
    let single = plan_interactively(
        vpc("10.0.0.0/24"),
        &config(),
        &mut ScriptedOperator::new([Step::Strategy(0), Step::Accept, Step::Accept, Step::Confirm]),
    )
    .unwrap();

    let mut operator = ScriptedOperator::new([
        Step::Strategy(0),
        Step::Accept,
        Step::Accept,
        Step::Reject,
        Step::Accept,
        Step::Accept,
        Step::Confirm,
    ]);
    let retried = plan_interactively(vpc("10.0.0.0/24"), &config(), &mut operator).unwrap();

    assert_eq!(single, retried);
    assert_eq!(
        serde_json::to_string(&single).unwrap(),
        serde_json::to_string(&retried).unwrap()
    );
}

#[test]
fn test_reconfigure_discards_overrides() {
    let mut session = session_for("10.0.0.0/24", [1, 1, 0]);
    session.decline_default().unwrap();
    session.submit_override("10.0.0.64").unwrap();
    session.accept_default().unwrap();
    assert_eq!(session.state(), SessionState::Previewing);

    session.reject_preview().unwrap();
    session.accept_default().unwrap();
    session.accept_default().unwrap();

    let result = session.confirm().unwrap();
    assert_eq!(result.tier(Tier::Public).unwrap().start, Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(result.tier(Tier::Private).unwrap().start, Ipv4Addr::new(10, 0, 0, 128));
}

// ============================================================================
// Multi-tier flows
// ============================================================================

#[test]
fn test_three_tiers_with_database_override() {
    // 1 public / 2 private / 1 database in a /20: 6 blocks -> /23
    let mut operator = ScriptedOperator::new([
        Step::Strategy(3),
        Step::Accept,
        Step::Accept,
        Step::Decline,
        // overlaps the private tier's cushion
        Step::Override("172.16.8.0".to_string()),
        Step::Override("172.16.12.0".to_string()),
        Step::Confirm,
    ]);
    let result = plan_interactively(vpc("172.16.0.0/20"), &config(), &mut operator).unwrap();

    assert_eq!(result.strategy, Strategy::from_counts([1, 2, 1]));
    assert_eq!(result.block_plan.mask(), "/23");
    assert_eq!(result.cidr_strings(Tier::Public), vec!["172.16.0.0/23"]);
    assert_eq!(
        result.cidr_strings(Tier::Private),
        vec!["172.16.4.0/23", "172.16.6.0/23"]
    );
    assert_eq!(result.cidr_strings(Tier::Database), vec!["172.16.12.0/23"]);
    assert!(matches!(
        operator.reported(),
        [Error::Overlap { tier: Tier::Database, other: Tier::Private, .. }]
    ));
}

#[test]
fn test_private_before_public() {
    let mut operator = ScriptedOperator::new([
        Step::Strategy(0),
        Step::Decline,
        Step::Override("10.0.0.128".to_string()),
        // default would start past the VPC
        Step::Accept,
        Step::Override("10.0.0.0".to_string()),
        Step::Confirm,
    ]);
    let result = plan_interactively(vpc("10.0.0.0/24"), &config(), &mut operator).unwrap();

    assert_eq!(result.cidr_strings(Tier::Public), vec!["10.0.0.128/26"]);
    assert_eq!(result.cidr_strings(Tier::Private), vec!["10.0.0.0/26"]);
    assert!(matches!(operator.reported(), [Error::OutOfRange { .. }]));
}

#[test]
fn test_default_past_end_of_address_space() {
    // public at the top of 255.255.255.0/24 pushes the next default past 255.255.255.255
    let mut operator = ScriptedOperator::new([
        Step::Strategy(0),
        Step::Decline,
        Step::Override("255.255.255.192".to_string()),
        Step::Override("255.255.255.0".to_string()),
        Step::Confirm,
    ]);
    let result = plan_interactively(vpc("255.255.255.0/24"), &config(), &mut operator).unwrap();
    assert_eq!(result.cidr_strings(Tier::Public), vec!["255.255.255.192/26"]);
    assert_eq!(result.cidr_strings(Tier::Private), vec!["255.255.255.0/26"]);
    assert_eq!(
        operator.reported().to_vec(),
        vec![Error::DefaultPastEnd {
            offset: 320,
            first: Ipv4Addr::new(255, 255, 255, 0),
            last: Ipv4Addr::BROADCAST,
        }]
    );
    assert_eq!(operator.remaining(), 0);
}

#[test]
fn test_result_views_share_one_source() {
    let mut operator = ScriptedOperator::new([
        Step::Strategy(4),
        Step::Accept,
        Step::Accept,
        Step::Confirm,
    ]);
    let result = plan_interactively(vpc("10.20.0.0/22"), &config(), &mut operator).unwrap();
    let summary = result.summary();

    // 2 public / 2 private: 5 blocks -> /25
    assert_eq!(
        summary.to_kv_line(),
        "vpc:10.20.0.0/22;total_subnets:4;\
         public_count:2;public_start:10.20.0.0;public_cidrs:10.20.0.0/25,10.20.0.128/25;\
         private_count:2;private_start:10.20.1.128;private_cidrs:10.20.1.128/25,10.20.2.0/25;\
         subnet_mask:/25;usable_ips:123"
    );
    let list = summary.to_string_list();
    assert!(list.contains(&"private_cidrs=10.20.1.128/25,10.20.2.0/25".to_string()));
}

#[test]
fn test_no_viable_strategy() {
    let mut operator = ScriptedOperator::new(Vec::<Step>::new());
    let result = plan_interactively(vpc("10.0.0.0/26"), &config(), &mut operator);
    assert!(matches!(result, Err(Error::NoViableStrategy { .. })));
}
