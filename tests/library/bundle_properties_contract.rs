use hacsgen::{
    ArtifactKind, Bundle, IntegrationConfig, IntegrationDomain, Locale, RepositoryCoordinates,
    ScanInterval, generate, sensor_entity_id,
};
use proptest::prelude::*;

const FILENAMES: [&str; 7] = [
    "manifest.json",
    "__init__.py",
    "const.py",
    "config_flow.py",
    "sensor.py",
    "hacs.json",
    "lovelace_card.yaml",
];

fn content<'a>(bundle: &'a Bundle, filename: &str) -> &'a str {
    &bundle.get(filename).unwrap().content
}

fn config_strategy() -> impl Strategy<Value = IntegrationConfig> {
    (
        "[A-Za-z][A-Za-z0-9 &'-]{0,24}",
        proptest::option::of("[a-z0-9_]{1,16}"),
        "https://[a-z]{1,10}\\.test/[a-z]{0,8}",
        ".{0,6}",
    )
        .prop_map(|(name, domain, feed, interval)| {
            let config = IntegrationConfig::new(name, feed)
                .with_scan_interval(ScanInterval::parse(&interval));
            match domain {
                Some(domain) => config.with_domain(IntegrationDomain::new(&domain).unwrap()),
                None => config,
            }
        })
}

fn repository_strategy() -> impl Strategy<Value = Option<RepositoryCoordinates>> {
    proptest::option::of(
        ("[a-z][a-z0-9-]{0,10}", "[a-z][a-z0-9-]{0,10}")
            .prop_map(|(owner, repo)| RepositoryCoordinates::new(&owner, &repo).unwrap()),
    )
}

fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::En), Just(Locale::El)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generation_is_deterministic_and_fixed_shape(
        config in config_strategy(),
        locale in locale_strategy(),
        repo in repository_strategy(),
    ) {
        let first = generate(&config, locale, repo.as_ref()).unwrap();
        let second = generate(&config, locale, repo.as_ref()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.filenames(), FILENAMES.to_vec());
    }

    #[test]
    fn identifier_and_interval_agree_across_files(config in config_strategy()) {
        let bundle = generate(&config, Locale::En, None).unwrap();
        let domain = config.domain.as_str();
        let minutes = config.scan_interval.minutes();

        let manifest: serde_json::Value =
            serde_json::from_str(content(&bundle, "manifest.json")).unwrap();
        prop_assert_eq!(manifest["domain"].as_str(), Some(domain));
        prop_assert_eq!(manifest["name"].as_str(), Some(config.name.as_str()));

        let hacs: serde_json::Value = serde_json::from_str(content(&bundle, "hacs.json")).unwrap();
        prop_assert_eq!(hacs["name"].as_str(), Some(config.name.as_str()));

        let constants = content(&bundle, "const.py");
        let expected_domain = format!("DOMAIN = \"{}\"", domain);
        let expected_interval = format!("DEFAULT_SCAN_INTERVAL = {}\n", minutes);
        prop_assert!(constants.contains(&expected_domain));
        prop_assert!(constants.contains(&expected_interval));

        let name = config.name.as_str();
        let constants_header = format!("\"\"\"Constants for the {} integration.\"\"\"", name);
        prop_assert!(constants.starts_with(&constants_header));

        let init = content(&bundle, "__init__.py");
        let init_header = format!("\"\"\"The {} integration.\"\"\"", name);
        let setup_doc = format!("\"\"\"Set up {} from a config entry.\"\"\"", name);
        prop_assert!(init.starts_with(&init_header));
        prop_assert!(init.contains(&setup_doc));

        let flow = content(&bundle, "config_flow.py");
        let flow_doc = format!("\"\"\"Handle a config flow for {}.\"\"\"", name);
        let flow_title = format!("title=\"{}\"", name);
        prop_assert!(flow.contains(&flow_doc));
        prop_assert!(flow.contains(&flow_title));

        let entity = sensor_entity_id(&config.domain);
        prop_assert!(content(&bundle, "sensor.py").contains(&entity));
        prop_assert!(content(&bundle, "lovelace_card.yaml").contains(&entity));
    }

    #[test]
    fn locale_changes_only_descriptions(config in config_strategy(), repo in repository_strategy()) {
        let en = generate(&config, Locale::En, repo.as_ref()).unwrap();
        let el = generate(&config, Locale::El, repo.as_ref()).unwrap();

        for (a, b) in en.iter().zip(el.iter()) {
            prop_assert_eq!(&a.filename, &b.filename);
            prop_assert_eq!(&a.content, &b.content);
            prop_assert_eq!(a.kind, b.kind);
            prop_assert_ne!(&a.description, &b.description);
        }
    }

    #[test]
    fn repository_affects_only_the_integration_manifest(
        config in config_strategy(),
        owner in "[a-z][a-z0-9-]{0,10}",
        name in "[a-z][a-z0-9-]{0,10}",
    ) {
        let repo = RepositoryCoordinates::new(&owner, &name).unwrap();
        let with = generate(&config, Locale::En, Some(&repo)).unwrap();
        let without = generate(&config, Locale::En, None).unwrap();

        for (a, b) in with.iter().zip(without.iter()) {
            if a.filename == "manifest.json" {
                prop_assert_ne!(&a.content, &b.content);
            } else {
                prop_assert_eq!(&a.content, &b.content);
            }
        }
    }

    #[test]
    fn structured_documents_parse(config in config_strategy(), repo in repository_strategy()) {
        let bundle = generate(&config, Locale::En, repo.as_ref()).unwrap();

        for artifact in bundle.iter() {
            match artifact.kind {
                ArtifactKind::StructuredData => {
                    prop_assert!(serde_json::from_str::<serde_json::Value>(&artifact.content).is_ok());
                }
                ArtifactKind::DeclarativeConfig => {
                    let card: serde_yaml::Value = serde_yaml::from_str(&artifact.content).unwrap();
                    prop_assert_eq!(card["type"].as_str(), Some("markdown"));
                }
                ArtifactKind::SourceCode => {}
            }
        }
    }
}

#[test]
fn non_positive_or_garbage_interval_becomes_fifteen() {
    for raw in ["0", "-7", "abc", "", "0.5", "min 5"] {
        let config = IntegrationConfig::new("Acme", "https://acme.test/rss")
            .with_scan_interval(ScanInterval::parse(raw));
        let bundle = generate(&config, Locale::En, None).unwrap();

        assert!(content(&bundle, "const.py").contains("DEFAULT_SCAN_INTERVAL = 15\n"), "{raw}");
        assert!(content(&bundle, "config_flow.py").contains("default=DEFAULT_SCAN_INTERVAL"));
    }
}

#[test]
fn interval_keeps_leading_integer_of_mixed_input() {
    for (raw, minutes) in [("7.5", 7), ("20 min", 20), ("30s", 30)] {
        let config = IntegrationConfig::new("Acme", "https://acme.test/rss")
            .with_scan_interval(ScanInterval::parse(raw));
        let bundle = generate(&config, Locale::En, None).unwrap();

        let expected = format!("DEFAULT_SCAN_INTERVAL = {minutes}\n");
        assert!(content(&bundle, "const.py").contains(&expected), "{raw}");
    }
}

#[test]
fn acme_feed_identifier_propagation() {
    let config = IntegrationConfig::new("Acme Feed", "https://acme.test/feed")
        .with_domain(IntegrationDomain::new("acme_feed").unwrap());
    let bundle = generate(&config, Locale::En, None).unwrap();

    assert!(content(&bundle, "const.py").contains("DOMAIN = \"acme_feed\""));
    assert!(content(&bundle, "manifest.json").contains("\"domain\": \"acme_feed\""));
    assert!(content(&bundle, "lovelace_card.yaml").contains("sensor.acme_feed_sensor"));
}
