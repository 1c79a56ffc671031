use std::sync::Arc;

use serde_json::json;
use structed_core::{Document, Session, TreeError, Value, WireFormat};

fn session() -> Session {
    let root = Value::from(json!({"user": {"name": "Ann", "tags": ["x", "y"]}}));
    Session::new(Document::load(root, WireFormat::Yaml).unwrap())
}

#[test]
fn subscribers_see_every_version_in_order() {
    let mut s = session();
    let rx = s.subscribe();

    s.set_value_at("user/tags/2", Value::from("z")).unwrap();
    s.remove_path("user/tags/0").unwrap();
    s.insert_at("user/age", Value::from(30i32)).unwrap();

    let versions: Vec<u64> = rx.try_iter().map(|snap| snap.version).collect();
    assert_eq!(versions, [1, 2, 3]);
    assert_eq!(s.key_size_at("user"), Ok(3));
    assert_eq!(s.get_key_at("user/tags", 1), Ok("1".to_string()));
}

#[test]
fn snapshots_are_independent() {
    let mut s = session();
    let v0 = s.snapshot();
    s.set_value_at("user/name", Value::from("Bo")).unwrap();
    let v1 = s.snapshot();

    assert!(!Arc::ptr_eq(&v0, &v1));
    assert_eq!(
        v0.document.get_path("user/name").unwrap().get_string(),
        Ok("Ann")
    );
    assert_eq!(
        v1.document.get_path("user/name").unwrap().get_string(),
        Ok("Bo")
    );
}

#[test]
fn failures_are_published_with_the_unchanged_document() {
    let mut s = session();
    let rx = s.subscribe();

    let err = s.get_path("user/missing").unwrap_err();
    assert_eq!(
        err,
        TreeError::NotFound {
            segment: "missing".into()
        }
    );
    let published = rx.try_recv().unwrap();
    assert_eq!(published.version, 1);
    assert_eq!(published.error.as_ref(), Some(&err));

    assert!(s.insert_at("user/tags/5", Value::Nil).is_err());
    let published = rx.try_recv().unwrap();
    assert_eq!(published.version, 2);
    assert!(matches!(
        published.error,
        Some(TreeError::IndexOutOfBounds { .. })
    ));
    assert_eq!(published.document.key_size_at("user/tags"), Ok(2));

    s.clear_error();
    assert_eq!(rx.try_recv().unwrap().error, None);
}

#[test]
fn successful_reads_do_not_publish() {
    let mut s = session();
    let rx = s.subscribe();
    assert_eq!(s.get_path("user/tags/1").unwrap().get_string(), Ok("y"));
    assert!(rx.try_recv().is_err());
    assert_eq!(s.version(), 0);
}

#[test]
fn format_change_affects_egress_order() {
    let root = Value::from(json!({"b": 1, "a": 2}));
    let mut s = Session::new(Document::load(root, WireFormat::Json).unwrap());
    let first_key = |s: &Session| -> String {
        let out = s.document().egress();
        let (k, _) = out.as_map().unwrap().iter().next().unwrap();
        k.clone()
    };
    assert_eq!(first_key(&s), "b");
    s.set_format(WireFormat::MessagePack);
    assert_eq!(first_key(&s), "a");
    assert_eq!(s.document().format(), WireFormat::MessagePack);
}
