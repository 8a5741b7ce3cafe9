//! 集成測試

use powernet::*;
use proptest::prelude::*;
use rstest::rstest;

fn load_fixture() -> Network {
    // 三台發電機，八間房屋全部接在 g1
    let mut text = String::from("generateur(g1,120).\ngenerateur(g2,80).\ngenerateur(g3,50).\n");
    let levels = ["BASSE", "NORMAL", "FORTE", "NORMAL", "BASSE", "FORTE", "NORMAL", "BASSE"];
    for (i, level) in levels.iter().enumerate() {
        text.push_str(&format!("maison(m{i},{level}).\n"));
    }
    for i in 0..levels.len() {
        text.push_str(&format!("connexion(g1,m{i}).\n"));
    }

    NetworkReader::read_str(&text).unwrap()
}

#[test]
fn test_dispersion_and_cost_example() {
    let mut network = Network::new();
    network.add_generator(Generator::new("A", 100));
    network.add_generator(Generator::new("B", 50));
    network.add_house(House::new("low", ConsumptionLevel::Low));
    network.add_house(House::new("high", ConsumptionLevel::High));
    network.connect("low", "A").unwrap();
    network.connect("high", "B").unwrap();

    assert!((network.dispersion() - 0.7).abs() < 1e-9);
    assert_eq!(network.surcharge(), 0.0);
    assert!((network.cost() - 0.7).abs() < 1e-9);
}

#[test]
fn test_surcharge_example() {
    let mut network = Network::new();
    network.add_generator(Generator::new("G", 70));
    network.add_house(House::new("h1", ConsumptionLevel::High));
    network.add_house(House::new("h2", ConsumptionLevel::High));
    network.connect("h1", "G").unwrap();
    network.connect("h2", "G").unwrap();

    assert!((network.surcharge() - 0.142857).abs() < 1e-4);
    assert_eq!(
        network.cost(),
        network.dispersion() + network.lambda() * network.surcharge()
    );
}

#[test]
fn test_read_optimize_write_round_trip() {
    let network = load_fixture();
    assert!(network.is_valid());

    let config = OptimizerConfig::new(5).with_seed(2024);
    let result = MultiStartOptimizer::new(config)
        .unwrap()
        .optimize(&network)
        .unwrap();

    assert!(result.best_cost < network.cost());
    assert!(result.network.is_valid());

    let text = NetworkWriter::write_string(&result.network);
    let restored = NetworkReader::read_str(&text).unwrap();

    assert_eq!(restored.cost(), result.best_cost);
    for house in network.houses() {
        assert_eq!(
            restored.current_generator(house.name()),
            result.network.current_generator(house.name())
        );
    }
}

#[test]
fn test_optimize_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reseau.txt");
    let output = dir.path().join("reseau_opt.txt");

    NetworkWriter::write_path(&load_fixture(), &input).unwrap();
    let report =
        optimize_file(&input, &output, DEFAULT_LAMBDA, OptimizerConfig::new(3).with_seed(1)).unwrap();

    let written = NetworkReader::read_path(&output).unwrap();
    assert_eq!(written.cost(), report.best_cost);
    assert!(report.improvement() >= 0.0);
}

#[test]
fn test_optimize_file_rejects_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "maison(m1,NORMAL).\ngenerateur(g1,10).\n").unwrap();

    let err =
        optimize_file(&input, &output, DEFAULT_LAMBDA, OptimizerConfig::default()).unwrap_err();

    match err {
        Error::Io(io) => {
            let parse = io.as_parse_error().unwrap();
            assert_eq!(parse.line, 2);
            assert_eq!(parse.kind, ParseErrorKind::GeneratorOutOfOrder);
        }
        other => panic!("預期解析錯誤，實際為 {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_optimize_file_applies_lambda() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reseau.txt");
    NetworkWriter::write_path(&load_fixture(), &input).unwrap();

    let mut reports = Vec::new();
    for (i, lambda) in [0.0, 25.0].into_iter().enumerate() {
        let output = dir.path().join(format!("reseau_opt_{i}.txt"));
        let report =
            optimize_file(&input, &output, lambda, OptimizerConfig::new(3).with_seed(5)).unwrap();

        assert_eq!(report.network.lambda(), lambda);

        // 檔案不保存 lambda，讀回後需重新套用
        let mut written = NetworkReader::read_path(&output).unwrap();
        written.set_lambda(lambda).unwrap();
        assert_eq!(written.cost(), report.best_cost);

        reports.push(report);
    }

    // g1 初始過載：懲罰權重影響輸入成本
    let fixture = load_fixture();
    assert_eq!(reports[0].initial_cost, fixture.dispersion());
    assert_eq!(
        reports[1].initial_cost,
        fixture.dispersion() + 25.0 * fixture.surcharge()
    );
    assert!(reports[1].initial_cost > reports[0].initial_cost);
}

#[test]
fn test_optimize_file_rejects_negative_lambda() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reseau.txt");
    let output = dir.path().join("out.txt");
    NetworkWriter::write_path(&load_fixture(), &input).unwrap();

    let err = optimize_file(&input, &output, -1.0, OptimizerConfig::new(2)).unwrap_err();

    assert!(matches!(err, Error::Network(PowerNetError::InvalidLambda(_))));
    assert!(!output.exists());
}

#[test]
fn test_optimize_file_refuses_invalid_network() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reseau.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(
        &input,
        "generateur(g1,100).\nmaison(m1,NORMAL).\nmaison(m2,BASSE).\nconnexion(g1,m1).\n",
    )
    .unwrap();

    let err = optimize_file(&input, &output, DEFAULT_LAMBDA, OptimizerConfig::new(2)).unwrap_err();

    match &err {
        Error::InvalidNetwork(issues) => {
            assert_eq!(
                issues,
                &vec![StructuralIssue::UnconnectedHouse {
                    house: "m2".to_string()
                }]
            );
        }
        other => panic!("預期結構錯誤，實際為 {other:?}"),
    }
    assert!(err.to_string().contains("m2"));
    assert!(!output.exists());
}

#[rstest]
#[case::modify("m0", "g2")]
#[case::modify_back("m1", "g3")]
fn test_manual_edits_keep_single_connection(#[case] house: &str, #[case] target: &str) {
    let mut network = load_fixture();

    network.modify_connection(house, "g1", target).unwrap();

    assert_eq!(network.current_generator(house).unwrap().name(), target);
    assert!(network.is_valid());
    assert_eq!(network.connection_count(), network.house_count());
}

#[test]
fn test_invalid_edits_leave_network_untouched() {
    let mut network = load_fixture();
    let before = NetworkWriter::write_string(&network);

    assert!(network.modify_connection("m0", "g2", "g3").is_err());
    assert!(network.disconnect("m0", "g3").is_err());
    assert!(network.connect("ghost", "g1").is_err());
    assert!(network.connect("m0", "ghost").is_err());

    assert_eq!(NetworkWriter::write_string(&network), before);
}

#[test]
fn test_structural_issues_detected() {
    let mut network = load_fixture();
    network.add_house(House::new("extra", ConsumptionLevel::High));
    network.connect("m0", "g2").unwrap();

    let issues = network.validate();

    assert!(issues.contains(&StructuralIssue::UnconnectedHouse {
        house: "extra".to_string()
    }));
    assert!(issues
        .iter()
        .any(|issue| matches!(issue, StructuralIssue::MultiplyConnectedHouse { house, .. } if house == "m0")));
}

#[test]
fn test_optimize_multi_start_convenience() {
    let network = load_fixture();
    let optimized = optimize_multi_start(&network, 3).unwrap();

    assert!(optimized.cost() <= network.cost());
    assert_eq!(optimized.house_count(), network.house_count());
}

fn arb_level() -> impl Strategy<Value = ConsumptionLevel> {
    prop::sample::select(ConsumptionLevel::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_read_optimize_write_keeps_entities(
        capacities in prop::collection::vec(1u32..200, 1..4),
        houses in prop::collection::vec((arb_level(), any::<prop::sample::Index>()), 1..10),
        seed in any::<u64>(),
    ) {
        let mut text = String::new();
        for (i, cap) in capacities.iter().enumerate() {
            text.push_str(&format!("generateur(g{i},{cap}).\n"));
        }
        for (i, (level, _)) in houses.iter().enumerate() {
            text.push_str(&format!("maison(m{i},{level}).\n"));
        }
        for (i, (_, pick)) in houses.iter().enumerate() {
            text.push_str(&format!("connexion(g{},m{i}).\n", pick.index(capacities.len())));
        }

        let network = NetworkReader::read_str(&text).unwrap();
        let config = OptimizerConfig::new(2).with_iterations_per_pair(20).with_seed(seed);
        let result = MultiStartOptimizer::new(config).unwrap().optimize(&network).unwrap();

        let written = NetworkWriter::write_string(&result.network);
        let restored = NetworkReader::read_str(&written).unwrap();

        prop_assert_eq!(restored.generators(), network.generators());
        prop_assert_eq!(restored.houses(), network.houses());
        for house in restored.houses() {
            prop_assert!(restored.current_generator(house.name()).is_some());
        }
        prop_assert_eq!(restored.connection_count(), network.house_count());
        prop_assert!(restored.cost() <= network.cost());
    }
}
