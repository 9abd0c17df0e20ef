use klub_model::Medal;
use klub_reconcile::{
    Entity, ImportError, ImportMode, classify_table, discover_legacy_tables, migrate,
    propose_migration,
};
use klub_store::{ClubStore, MemoryStore, RawTable};

fn raw(name: &str, columns: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        name: name.to_string(),
        columns: columns.iter().map(|column| (*column).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    }
}

#[test]
fn table_names_classify_by_alias() {
    assert_eq!(classify_table("NATJECANJA_98").unwrap(), Entity::Competitions);
    assert_eq!(classify_table("rezultati_stari").unwrap(), Entity::Results);
    assert_eq!(classify_table("clanovi").unwrap(), Entity::Members);
    assert_eq!(classify_table("evidencija_2001").unwrap(), Entity::Attendance);
    assert!(matches!(
        classify_table("rezultati_natjecanja"),
        Err(ImportError::AmbiguousTable(_))
    ));
    assert!(matches!(
        classify_table("backup_tmp"),
        Err(ImportError::UnknownTable(_))
    ));
}

#[test]
fn discovery_lists_matching_tables_and_flags_ambiguity() {
    let mut store = MemoryStore::new();
    store.register_legacy_table(raw("natjecanja_98", &["redbr"], &[&["1"]]));
    store.register_legacy_table(raw("rezultati_natjecanja", &["rbr"], &[&["1"]]));
    store.register_legacy_table(raw("backup_tmp", &["x"], &[&["y"]]));

    let found = discover_legacy_tables(&store).expect("discover");
    assert_eq!(found.len(), 2);
    let competitions = found
        .iter()
        .find(|table| table.name == "natjecanja_98")
        .expect("competitions table");
    assert_eq!(competitions.entity, Some(Entity::Competitions));
    assert_eq!(competitions.rows, 1);
    let ambiguous = found
        .iter()
        .find(|table| table.name == "rezultati_natjecanja")
        .expect("ambiguous table");
    assert_eq!(ambiguous.entity, None);
}

#[test]
fn proposal_maps_legacy_columns_with_confidence() {
    let mut store = MemoryStore::new();
    store.register_legacy_table(raw(
        "natjecanja_98",
        &["redbr", "god", "mj_odr", "dat_od", "dat_do", "biljeske"],
        &[
            &["1", "1998", "Zagreb", "14.03.1998", "15.03.1998", ""],
            &["2", "1998", "Osijek", "21.11.1998", "", "dva kola"],
        ],
    ));

    let proposal = propose_migration(&store, "natjecanja_98").expect("propose");
    assert_eq!(proposal.entity, Entity::Competitions);
    assert!(proposal.missing_required.is_empty());

    let number = proposal
        .fields
        .iter()
        .find(|field| field.canonical == "Redni broj")
        .expect("number mapped");
    assert_eq!(number.source, "redbr");
    assert!(number.confidence > 0.5);
    let start = proposal
        .fields
        .iter()
        .find(|field| field.canonical == "Datum početka")
        .expect("start date mapped");
    assert_eq!(start.source, "dat_od");
}

#[test]
fn proposal_surfaces_missing_required_columns() {
    let mut store = MemoryStore::new();
    store.register_legacy_table(raw("natjecanja_x", &["god", "biljeske"], &[&["1998", ""]]));
    let proposal = propose_migration(&store, "natjecanja_x").expect("propose");
    assert!(proposal.missing_required.contains(&"Redni broj".to_string()));
    assert!(proposal.missing_required.contains(&"Mjesto".to_string()));
    assert!(proposal.unclaimed.is_empty());
}

#[test]
fn migration_flows_through_the_normal_import_path() {
    let mut store = MemoryStore::new();
    store.register_legacy_table(raw(
        "natjecanja_98",
        &["redbr", "god", "mj_odr"],
        &[&["1", "1998", "Zagreb"], &["2", "1998", "Osijek"]],
    ));
    store.register_legacy_table(raw(
        "rezultati_98",
        &["rbr", "imeprez", "kategorija", "borbe", "pobjeda", "poraza", "medalja"],
        &[
            &["1", "Ivan Horvat", "-52kg", "3", "2", "1", "zlato"],
            // References a competition that was never exported.
            &["9", "Ana Kovač", "-48kg", "2", "2", "0", ""],
        ],
    ));

    let competitions = migrate(&mut store, "natjecanja_98", ImportMode::Commit).expect("migrate");
    assert_eq!(competitions.created, 2);

    let results = migrate(&mut store, "rezultati_98", ImportMode::Commit).expect("migrate");
    assert_eq!(results.created, 1);
    assert_eq!(results.skipped, 1);
    assert!(results.is_clean());
    let stored = store.results(1).unwrap();
    assert_eq!(stored[0].medal, Medal::Gold);

    // Running the same migration again changes nothing.
    let again = migrate(&mut store, "natjecanja_98", ImportMode::Commit).expect("migrate");
    assert_eq!(again.created, 0);
    assert_eq!(again.skipped, 2);
}
