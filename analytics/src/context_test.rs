use maplit::btreemap;
use serde_json::json;

use crate::context::AppInfo;
use crate::context::Context;
use crate::context::LibraryInfo;
use crate::context::LIBRARY_NAME;

#[test]
fn test_library_info_current() {
    let l = LibraryInfo::current();

    assert_eq!("rudder-analytics", l.name);
    assert_eq!(LIBRARY_NAME, l.name);
    assert!(!l.version.is_empty());
}

#[test]
fn test_context_serialize() -> anyhow::Result<()> {
    let ctx = Context {
        app: Some(AppInfo {
            name: "shop".to_string(),
            version: "1.2.0".to_string(),
            ..Default::default()
        }),
        library: LibraryInfo {
            name: "lib".to_string(),
            version: "0.1".to_string(),
        },
        user_agent: Some("curl/8.0".to_string()),
        traits: btreemap! {"plan".to_string() => json!("pro")},
        extra: btreemap! {"campaign".to_string() => json!({"name": "spring"})},
        ..Default::default()
    };

    let got = serde_json::to_value(&ctx)?;
    assert_eq!(
        json!({
            "app": {"name": "shop", "version": "1.2.0"},
            "library": {"name": "lib", "version": "0.1"},
            "userAgent": "curl/8.0",
            "traits": {"plan": "pro"},
            "campaign": {"name": "spring"},
        }),
        got
    );

    let back: Context = serde_json::from_value(got)?;
    assert_eq!(ctx, back);

    Ok(())
}

#[test]
fn test_empty_context_serialize() -> anyhow::Result<()> {
    let got = serde_json::to_value(Context::default())?;
    assert_eq!(json!({"library": {"name": "", "version": ""}}), got);
    Ok(())
}

#[test]
fn test_remove_shadowing_extra() {
    let mut ctx = Context {
        extra: btreemap! {
            "app".to_string() => json!("x"),
            "traits".to_string() => json!({}),
            "page".to_string() => json!({"path": "/"}),
        },
        ..Default::default()
    };

    ctx.remove_shadowing_extra();

    assert_eq!(btreemap! {"page".to_string() => json!({"path": "/"})}, ctx.extra);
}
