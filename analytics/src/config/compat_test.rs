use crate::config::compat::apply_deprecated_fields;
use crate::Config;
use crate::DEFAULT_ENDPOINT;

#[test]
fn test_endpoint_precedence() -> anyhow::Result<()> {
    let cases = [
        ("https://a", "https://b", "https://a"),
        ("", "https://b", "https://b"),
        ("https://a", "", "https://a"),
        ("", "", DEFAULT_ENDPOINT),
    ];

    for (data_plane_url, endpoint, want) in cases {
        let cfg = Config {
            data_plane_url: data_plane_url.to_string(),
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
        .resolve()?;

        assert_eq!(want, cfg.endpoint, "data_plane_url={data_plane_url:?} endpoint={endpoint:?}");
    }

    Ok(())
}

#[test]
fn test_deprecated_gzip_forces_disable_gzip() -> anyhow::Result<()> {
    let cases = [
        // gzip, disable_gzip, want disable_gzip
        (0, false, false),
        (0, true, true),
        (1, false, true),
        (1, true, true),
        (-3, false, true),
    ];

    for (gzip, disable_gzip, want) in cases {
        let cfg = Config {
            gzip,
            disable_gzip,
            ..Default::default()
        }
        .resolve()?;

        assert_eq!(want, cfg.disable_gzip, "gzip={gzip} disable_gzip={disable_gzip}");
    }

    Ok(())
}

#[test]
fn test_disable_gzip_does_not_change_gzip() {
    let c = apply_deprecated_fields(Config {
        disable_gzip: true,
        ..Default::default()
    });

    assert_eq!(0, c.gzip);
    assert_eq!(true, c.disable_gzip);
}

#[test]
fn test_apply_deprecated_fields_keeps_replacement() {
    let c = apply_deprecated_fields(Config {
        endpoint: "https://old".to_string(),
        data_plane_url: "https://new".to_string(),
        ..Default::default()
    });

    assert_eq!("https://new", c.data_plane_url);
    assert_eq!("https://old", c.endpoint);

    let c = apply_deprecated_fields(Config {
        endpoint: "https://old".to_string(),
        ..Default::default()
    });

    assert_eq!("https://old", c.data_plane_url);
}
