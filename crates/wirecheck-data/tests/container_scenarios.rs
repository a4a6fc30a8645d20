use wirecheck_data::{DataContainer, DataError, DataType, ROOT};

const MESSAGE: &str = r#"{"foo":{"bar":2},"goo":1,"bool":true,"null":null}"#;

#[test]
fn reads_from_parsed_message() {
    let data: DataContainer = MESSAGE.parse().expect("message should parse");

    assert_eq!(data.get::<i64>(["foo", "bar"]), 2);
    assert_eq!(data.get::<String>("null"), "");
    assert_eq!(data.get::<i64>("null"), 0);
    assert!(!data.includes(["foo", "baz"]));
    assert_eq!(data.keys(), vec!["foo", "goo", "bool", "null"]);
}

#[test]
fn set_then_get_on_empty_container() {
    let mut data = DataContainer::new();
    data.set("a", 4);

    assert_eq!(data.get::<i64>("a"), 4);
    assert_eq!(data.keys(), vec!["a"]);
}

#[test]
fn scalar_round_trips() {
    let mut data = DataContainer::new();
    data.set(["p", "i"], -12_i64);
    data.set(["p", "u"], u64::MAX);
    data.set(["p", "d"], 2.71828);
    data.set(["p", "b"], false);
    data.set(["p", "s"], "text".to_string());

    assert_eq!(data.get::<i64>(["p", "i"]), -12);
    assert_eq!(data.get::<u64>(["p", "u"]), u64::MAX);
    assert_eq!(data.get::<f64>(["p", "d"]), 2.71828);
    assert!(!data.get::<bool>(["p", "b"]));
    assert_eq!(data.get::<String>(["p", "s"]), "text");
}

#[test]
fn missing_paths_default_except_type_query() {
    let data = DataContainer::new();
    let path = ["no", "such", "entry"];

    assert_eq!(data.get::<i64>(path), 0);
    assert_eq!(data.get::<String>(path), "");
    assert!(!data.get::<bool>(path));
    assert!(data.get::<Vec<i64>>(path).is_empty());
    assert!(!data.includes(path));
    assert!(matches!(data.type_of(path), Err(DataError::MissingKey(_))));
}

#[test]
fn falsy_values_are_present() {
    let mut data = DataContainer::new();
    assert!(matches!(data.type_of("missing"), Err(DataError::MissingKey(_))));

    data.set("b", false);
    assert_eq!(data.type_of("b").unwrap(), DataType::Bool);
    assert!(data.includes("b"));
}

#[test]
fn keys_keep_construction_order() {
    let data = DataContainer::parse(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(data.keys().len(), 2);
    assert_eq!(data.keys(), vec!["a", "b"]);
}

#[test]
fn root_copy_is_independent() {
    let mut data = DataContainer::parse(MESSAGE).unwrap();
    let copy = data.get::<DataContainer>(ROOT);
    data.set("goo", 99);

    assert_eq!(copy.get::<i64>("goo"), 1);
    assert_eq!(data.get::<i64>("goo"), 99);
}

#[test]
fn containers_move_between_threads() {
    let data = DataContainer::parse(MESSAGE).unwrap();
    let handle = std::thread::spawn(move || data.get::<i64>(["foo", "bar"]));
    assert_eq!(handle.join().unwrap(), 2);
}
