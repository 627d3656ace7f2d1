use crate::capacity::{
    balance, effective_from_usable, group_count, max_effective_tib, overhead, plan_ddp, plan_pool,
    plan_pools, plan_raid, required_drives, size_pool, LayoutRequest, Overhead, PlanError,
    PlanningSession, Pool, PoolError, MAX_DDP_DRIVES, MAX_POOLS,
};
use crate::capacity::{whole_drives, MAX_POOL_DRIVES};
use crate::catalog::{DriveCatalog, ReductionTechnique, StripeGeometry};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn sample_pool() -> Pool {
    Pool {
        drd_effective_tib: 500.0,
        drs_effective_tib: 400.0,
        ratio: 4.0,
        depletion_threshold_pct: 90.0,
        journal_tib: 10.0,
        technique: ReductionTechnique::CompressionAndDedupe,
        drive_model: "30TB-SSD".to_string(),
        stripe: StripeGeometry::SixPlusTwo,
    }
}

fn request<'a>(
    catalog: &'a DriveCatalog,
    raw_tib: f64,
    drive: &str,
    stripe: StripeGeometry,
) -> LayoutRequest<'a> {
    LayoutRequest {
        raw_tib,
        drive: catalog.get(drive).unwrap(),
        stripe,
        depletion_fraction: 0.9,
        technique: ReductionTechnique::CompressionAndDedupe,
        ratio: 4.0,
        overhead: Overhead { metadata_tib: 39.0, garbage_tib: 8.75 },
    }
}

#[test]
fn test_dedupe_pool_sizing() {
    let sizing = size_pool(&sample_pool()).unwrap();
    assert!(close(sizing.overhead.metadata_tib, 39.0));
    assert!(close(sizing.overhead.garbage_tib, 8.75));
    assert!(close(sizing.required_raw_tib, 314.17));
}

#[test]
fn test_compression_only_overhead() {
    let o = overhead(ReductionTechnique::CompressionOnly, 0.0, 300.0, 2.0).unwrap();
    assert!(close(o.metadata_tib, 12.0));
    assert!(close(o.garbage_tib, 10.5));

    // Garbage covers DRD and DRS together for compression only.
    let o = overhead(ReductionTechnique::CompressionOnly, 100.0, 100.0, 4.0).unwrap();
    assert!(close(o.metadata_tib, 6.0));
    assert!(close(o.garbage_tib, 3.5));

    let pool = Pool {
        drd_effective_tib: 0.0,
        drs_effective_tib: 300.0,
        ratio: 2.0,
        depletion_threshold_pct: 85.0,
        journal_tib: 0.0,
        technique: ReductionTechnique::CompressionOnly,
        ..sample_pool()
    };
    assert!(close(size_pool(&pool).unwrap().required_raw_tib, 202.94));
}

#[test]
fn test_reduction_mismatch_iff_no_reduction_with_drd() {
    for technique in ReductionTechnique::ALL {
        for drd in [0.0, 0.5, 100.0] {
            let result = overhead(technique, drd, 50.0, 2.0);
            let expect_mismatch = technique == ReductionTechnique::None && drd > 0.0;
            assert_eq!(
                matches!(result, Err(PoolError::ReductionMismatch { .. })),
                expect_mismatch,
                "technique={technique}, drd={drd}"
            );
        }
    }
    assert_eq!(
        overhead(ReductionTechnique::None, 0.0, 50.0, 1.0).unwrap(),
        Overhead::default()
    );
}

#[test]
fn test_depletion_threshold_bounds() {
    for pct in [80.0, 85.0, 90.0, 100.0] {
        let pool = Pool { depletion_threshold_pct: pct, ..sample_pool() };
        assert!(size_pool(&pool).is_ok(), "{pct}% should be accepted");
    }
    for pct in [0.0, 50.0, 79.99, 100.01, 120.0, f64::NAN] {
        let pool = Pool { depletion_threshold_pct: pct, ..sample_pool() };
        assert!(
            matches!(size_pool(&pool), Err(PoolError::DepletionThresholdOutOfRange { .. })),
            "{pct}% should be rejected"
        );
    }
}

#[test]
fn test_depletion_checked_before_reduction() {
    let pool = Pool {
        depletion_threshold_pct: 70.0,
        technique: ReductionTechnique::None,
        ..sample_pool()
    };
    assert_eq!(
        size_pool(&pool),
        Err(PoolError::DepletionThresholdOutOfRange { threshold_pct: 70.0 })
    );
}

#[test]
fn test_reduction_mismatch_checked_before_ratio_and_capacities() {
    let pool = Pool {
        drd_effective_tib: 10.0,
        ratio: 0.0,
        technique: ReductionTechnique::None,
        ..sample_pool()
    };
    assert_eq!(size_pool(&pool), Err(PoolError::ReductionMismatch { drd_tib: 10.0 }));

    let pool = Pool { ratio: -1.0, journal_tib: -5.0, ..pool };
    assert_eq!(size_pool(&pool), Err(PoolError::ReductionMismatch { drd_tib: 10.0 }));
}

#[test]
fn test_ratio_and_capacity_validation() {
    let pool = Pool { ratio: 0.0, ..sample_pool() };
    assert_eq!(size_pool(&pool), Err(PoolError::NonPositiveRatio { ratio: 0.0 }));

    let pool = Pool { journal_tib: -1.0, ..sample_pool() };
    assert!(matches!(
        size_pool(&pool),
        Err(PoolError::NegativeCapacity { field: "journal", .. })
    ));
}

#[test]
fn test_ddp_plan_for_sample_pool() {
    let catalog = DriveCatalog::builtin();
    let req = request(&catalog, 314.17, "30TB-SSD", StripeGeometry::SixPlusTwo);
    let ddp = plan_ddp(&req).unwrap();

    assert_eq!(ddp.required_drives, 16);
    assert_eq!(ddp.groups.len(), 1);
    assert_eq!(ddp.groups[0].drive_count, 16);
    assert_eq!(ddp.configured_group_sizes, vec![17]);
    assert_eq!(ddp.configured_drives, 17);
    assert!(close(ddp.ddp_capacity_tib, 328.464_726_562_5));
    assert!(close(ddp.max_effective_tib, 991.47));
}

#[test]
fn test_wide_stripe_padding() {
    let catalog = DriveCatalog::builtin();
    let req = request(&catalog, 314.17, "30TB-SSD", StripeGeometry::FourteenPlusTwo);
    assert_eq!(plan_ddp(&req).unwrap().required_drives, 16);

    let drive = catalog.get("3.8TB-SSD").unwrap();
    assert_eq!(required_drives(0.0, drive, StripeGeometry::SixPlusTwo), Ok(8));
    assert_eq!(required_drives(0.0, drive, StripeGeometry::FourteenPlusTwo), Ok(16));
}

#[test]
fn test_padding_floor_and_monotonicity() {
    let catalog = DriveCatalog::builtin();
    for drive in catalog.iter() {
        for stripe in StripeGeometry::ALL {
            let mut previous = 0;
            for step in 0..4000 {
                let raw_tib = f64::from(step) * 0.73;
                let drives = required_drives(raw_tib, drive, stripe).unwrap();
                assert!(drives >= stripe.total_drives());
                assert!(drives >= previous, "{} {stripe} at {raw_tib} TiB", drive.id);
                previous = drives;
            }
        }
    }
}

#[test]
fn test_no_under_provisioning() {
    let catalog = DriveCatalog::builtin();
    for drive in catalog.iter() {
        for stripe in StripeGeometry::ALL {
            for step in 0..2000 {
                let raw_tib = f64::from(step) * 1.37;
                let ddp = plan_ddp(&request(&catalog, raw_tib, &drive.id, stripe)).unwrap();
                assert!(
                    ddp.ddp_capacity_tib + 1e-6 >= raw_tib,
                    "{} {stripe}: {} < {raw_tib}",
                    drive.id,
                    ddp.ddp_capacity_tib
                );
            }
        }
    }
}

#[test]
fn test_balance_invariant() {
    for drives in 0..=300 {
        for groups in 1..=12 {
            let balanced = balance(drives, groups);
            assert_eq!(balanced.len(), groups as usize);
            assert_eq!(balanced.iter().map(|g| g.drive_count).sum::<u32>(), drives);

            let base = drives / groups;
            assert!(balanced.iter().all(|g| g.drive_count == base || g.drive_count == base + 1));
            // Leftover drives land on the lowest indices.
            assert!(balanced.windows(2).all(|w| w[0].drive_count >= w[1].drive_count));
            assert!(balanced.iter().enumerate().all(|(i, g)| g.index == i));
        }
    }
}

#[test]
fn test_group_count_boundaries() {
    assert_eq!(MAX_DDP_DRIVES, 31);
    assert_eq!(group_count(16), 1);
    assert_eq!(group_count(30), 1);
    assert_eq!(group_count(31), 2);
    assert_eq!(group_count(62), 3);

    let groups: Vec<u32> = balance(31, group_count(31)).iter().map(|g| g.drive_count).collect();
    assert_eq!(groups, vec![16, 15]);
    let groups: Vec<u32> = balance(70, 3).iter().map(|g| g.drive_count).collect();
    assert_eq!(groups, vec![24, 23, 23]);
}

#[test]
fn test_multi_ddp_without_reduction() {
    let catalog = DriveCatalog::builtin();
    let pool = Pool {
        drd_effective_tib: 0.0,
        drs_effective_tib: 200.0,
        ratio: 1.0,
        depletion_threshold_pct: 100.0,
        journal_tib: 5.0,
        technique: ReductionTechnique::None,
        drive_model: "3.8TB-SSD".to_string(),
        stripe: StripeGeometry::FourteenPlusTwo,
    };
    let plan = plan_pool(0, &pool, &catalog).unwrap();

    assert!(close(plan.required_raw_tib, 205.0));
    assert_eq!(plan.ddp.required_drives, 69);
    assert_eq!(plan.ddp.configured_group_sizes, vec![24, 24, 24]);
    assert_eq!(plan.ddp.configured_drives, 72);
    // No reduction: effective equals usable.
    assert!(close(plan.ddp.max_effective_tib, 207.61));
}

#[test]
fn test_raid_plan_for_sample_pool() {
    let catalog = DriveCatalog::builtin();
    let raid =
        plan_raid(&request(&catalog, 314.17, "30TB-SSD", StripeGeometry::SixPlusTwo)).unwrap();

    assert_eq!(raid.required_data_drives, 12);
    assert_eq!(raid.parity_group_count, 2);
    assert_eq!(raid.total_configured_drives, 16);
    assert_eq!(raid.recommended_spares, 1);
    assert!(close(raid.raid_capacity_tib, 328.46));
    assert!(close(raid.max_effective_tib, 991.47));
}

#[test]
fn test_raid_spares_scale_with_drive_count() {
    let catalog = DriveCatalog::builtin();
    // 3.8TB drives: 400 TiB needs 117 data drives -> 9 x 14+2 groups, 144 drives.
    let raid =
        plan_raid(&request(&catalog, 400.0, "3.8TB-SSD", StripeGeometry::FourteenPlusTwo)).unwrap();
    assert_eq!(raid.required_data_drives, 117);
    assert_eq!(raid.parity_group_count, 9);
    assert_eq!(raid.total_configured_drives, 144);
    assert_eq!(raid.recommended_spares, 5);
}

#[test]
fn test_max_effective_rounding() {
    let o = Overhead { metadata_tib: 1.0, garbage_tib: 0.5 };
    assert!(close(max_effective_tib(10.0, ReductionTechnique::CompressionOnly, &o, 3.0), 25.5));
    assert!(close(max_effective_tib(10.004, ReductionTechnique::None, &o, 3.0), 10.0));
}

#[test]
fn test_effective_converter() {
    assert!(close(effective_from_usable(100.0, 4.0).unwrap(), 305.34));
    assert!(close(effective_from_usable(50.0, 2.0).unwrap(), 84.03));
    assert!(close(effective_from_usable(0.0, 4.0).unwrap(), 0.0));
    assert!(effective_from_usable(100.0, 0.0).is_err());
    assert!(effective_from_usable(-1.0, 2.0).is_err());
}

#[test]
fn test_session_rejects_fourth_pool() {
    let catalog = DriveCatalog::builtin();
    let mut session = PlanningSession::new(&catalog, MAX_POOLS);
    for expected in 0..3 {
        assert_eq!(session.add_pool(sample_pool()), Ok(expected));
    }
    assert_eq!(
        session.add_pool(sample_pool()),
        Err(PlanError::PoolCountExceeded { requested: 4, max: 3 })
    );
    assert_eq!(session.plan().len(), 3);
}

#[test]
fn test_plan_pools_rejects_oversized_batch() {
    let catalog = DriveCatalog::builtin();
    let pools = vec![sample_pool(); 4];
    assert_eq!(
        plan_pools(pools, &catalog, MAX_POOLS),
        Err(PlanError::PoolCountExceeded { requested: 4, max: 3 })
    );
}

#[test]
fn test_failed_pool_does_not_abort_siblings() {
    let catalog = DriveCatalog::builtin();
    let pools = vec![
        sample_pool(),
        Pool { depletion_threshold_pct: 75.0, ..sample_pool() },
        Pool { drive_model: "99TB-SSD".to_string(), ..sample_pool() },
    ];
    let outcomes = plan_pools(pools, &catalog, MAX_POOLS).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].result.as_ref().unwrap().ddp.configured_drives, 17);
    assert_eq!(
        outcomes[1].result,
        Err(PlanError::Pool {
            index: 1,
            source: PoolError::DepletionThresholdOutOfRange { threshold_pct: 75.0 },
        })
    );
    let err = outcomes[2].result.as_ref().unwrap_err();
    assert_eq!(err.to_string(), "pool 2: unknown drive model: 99TB-SSD");
}

fn oversized_pool(drs_effective_tib: f64) -> Pool {
    Pool {
        drd_effective_tib: 0.0,
        drs_effective_tib,
        ratio: 1.0,
        depletion_threshold_pct: 100.0,
        journal_tib: 0.0,
        technique: ReductionTechnique::None,
        drive_model: "3.8TB-SSD".to_string(),
        stripe: StripeGeometry::SixPlusTwo,
    }
}

#[test]
fn test_whole_drives_bound() {
    assert_eq!(whole_drives(0.0, 0.0), Ok(0));
    assert_eq!(whole_drives(-3.0, 0.0), Ok(0));
    assert_eq!(whole_drives(16.2, 1.0), Ok(17));
    assert_eq!(whole_drives(f64::from(MAX_POOL_DRIVES), 1.0), Ok(MAX_POOL_DRIVES));
    for drives in [f64::from(MAX_POOL_DRIVES) + 0.5, 1e20, f64::INFINITY, f64::NAN] {
        assert!(
            matches!(whole_drives(drives, 1.0), Err(PoolError::CapacityTooLarge { .. })),
            "{drives} drives should be rejected"
        );
    }
}

#[test]
fn test_huge_raw_size_is_rejected_not_truncated() {
    let catalog = DriveCatalog::builtin();
    let result = plan_pool(0, &oversized_pool(1e13), &catalog);
    assert!(matches!(
        result,
        Err(PoolError::CapacityTooLarge { max_drives: MAX_POOL_DRIVES, .. })
    ));

    let drive = catalog.get("3.8TB-SSD").unwrap();
    assert!(required_drives(1e13, drive, StripeGeometry::SixPlusTwo).is_err());
    let req = request(&catalog, 1e13, "3.8TB-SSD", StripeGeometry::SixPlusTwo);
    assert!(plan_ddp(&req).is_err());
    assert!(plan_raid(&req).is_err());
}

#[test]
fn test_group_count_is_bounded() {
    let catalog = DriveCatalog::builtin();
    // 1e8 TiB would otherwise fan out into more than a million DDPs.
    let err = plan_pool(0, &oversized_pool(1e8), &catalog).unwrap_err();
    assert!(matches!(err, PoolError::CapacityTooLarge { .. }));
    assert!(err.to_string().contains("needs more than 10000 drives"), "{err}");

    // Largest layouts that still fit stay well within the group limit.
    let drive = catalog.get("3.8TB-SSD").unwrap();
    let raw_tib = 25_000.0;
    let drives = required_drives(raw_tib, drive, StripeGeometry::SixPlusTwo).unwrap();
    assert!(drives <= MAX_POOL_DRIVES);
    let ddp = plan_ddp(&request(&catalog, raw_tib, "3.8TB-SSD", StripeGeometry::SixPlusTwo)).unwrap();
    assert_eq!(ddp.groups.len() as u32, group_count(drives));
    assert_eq!(ddp.configured_drives, drives + group_count(drives));
}

#[test]
fn test_oversized_pool_does_not_abort_siblings() {
    let catalog = DriveCatalog::builtin();
    let outcomes = plan_pools(vec![oversized_pool(1e13), sample_pool()], &catalog, MAX_POOLS).unwrap();
    assert!(matches!(
        outcomes[0].result,
        Err(PlanError::Pool { index: 0, source: PoolError::CapacityTooLarge { .. } })
    ));
    assert_eq!(outcomes[1].result.as_ref().unwrap().ddp.configured_drives, 17);
}
