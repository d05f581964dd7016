mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn lists_all_incidentes_without_parameters() -> Result<()> {
    let app = common::test_app();
    let token = common::texaco_token();

    let (status, body) = common::get(&app, "/empresas/incidentes", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);

    let incidentes = body.as_array().expect("array body");
    assert_eq!(incidentes.len(), 8);
    assert_eq!(incidentes[0]["cnpjEmpresa"], "05014725000152");
    assert_eq!(incidentes[5]["cnpjEmpresa"], "03021302000134");
    Ok(())
}

#[tokio::test]
async fn filters_incidentes_by_cnpj_in_insertion_order() -> Result<()> {
    let app = common::test_app();
    let token = common::texaco_token();

    let (status, body) = common::get(
        &app,
        "/empresas/incidentes?tipo=cnpj&valor=03021302000134",
        Some(&token),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let incidentes = body.as_array().expect("array body");
    assert_eq!(incidentes.len(), 2);
    assert_eq!(incidentes[0]["cnpjEmpresa"], "03021302000134");
    assert_eq!(incidentes[0]["comentario"], "Vazamento de óleo no setor 4");
    assert_eq!(incidentes[1]["cnpjEmpresa"], "03021302000134");
    assert_eq!(incidentes[1]["comentario"], "Container rachado no pier 76");
    Ok(())
}

#[tokio::test]
async fn half_specified_filter_is_rejected_before_dispatch() -> Result<()> {
    let app = common::test_app();
    let token = common::texaco_token();

    for uri in [
        "/empresas/incidentes?valor=03021302000134",
        "/empresas/incidentes?tipo=cnpj",
        "/empresas/incidentes?foo=bar",
    ] {
        let (status, body) = common::get(&app, uri, Some(&token)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}: {}", uri, body);
        assert_eq!(body["message"], "a required parameter was not provided");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
    Ok(())
}

#[tokio::test]
async fn empty_string_parameters_still_count_as_present() -> Result<()> {
    let app = common::test_app();
    let token = common::texaco_token();

    let (status, body) =
        common::get(&app, "/empresas/incidentes?tipo=&valor=", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    Ok(())
}

#[tokio::test]
async fn unknown_filter_kind_is_allowed_and_matches_nothing() -> Result<()> {
    let app = common::test_app();
    let token = common::texaco_token();

    let (status, body) = common::get(
        &app,
        "/empresas/incidentes?tipo=nome&valor=Texaco",
        Some(&token),
    )
    .await?;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body.as_array().expect("array body").len(), 0);
    Ok(())
}

#[tokio::test]
async fn registers_an_incidente_with_assigned_id() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let payload = json!({
        "nivelPerigo": "DANGER",
        "comentario": "Explosão de tubulação no setor 5",
        "data": "2020/12/26 19:02:37",
        "status": "ABERTO"
    });

    let (status, body) = common::request(
        &app,
        "POST",
        "/empresas/05014725000152",
        Some(&token),
        Some(payload),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    assert_eq!(body["id"], 9);
    assert_eq!(body["cnpjEmpresa"], "05014725000152");
    assert_eq!(body["nivelPerigo"], "DANGER");
    assert_eq!(body["comentario"], "Explosão de tubulação no setor 5");
    assert_eq!(body["data"], "2020/12/26 19:02:37");
    assert_eq!(body["status"], "ABERTO");

    // The new record shows up in the unfiltered listing
    let (_, listing) = common::get(&app, "/empresas/incidentes", Some(&token)).await?;
    assert_eq!(listing.as_array().expect("array").len(), 9);
    Ok(())
}

#[tokio::test]
async fn registering_against_unknown_cnpj_is_404() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let payload = json!({
        "nivelPerigo": "SAFE",
        "comentario": "empresa inexistente"
    });

    let (status, body) = common::request(
        &app,
        "POST",
        "/empresas/00000000000000",
        Some(&token),
        Some(payload),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn updates_an_incidente_and_keeps_unspecified_fields() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let payload = json!({
        "nivelPerigo": "DANGER",
        "comentario": "Explosão de tubulação no setor 5",
        "status": "RESOLVIDO",
        "dataResolucao": "2020/12/27 20:02:37"
    });

    let (status, body) =
        common::request(&app, "PUT", "/empresas/1", Some(&token), Some(payload)).await?;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["id"], 1);
    assert_eq!(body["cnpjEmpresa"], "05014725000152");
    assert_eq!(body["nivelPerigo"], "DANGER");
    assert_eq!(body["comentario"], "Explosão de tubulação no setor 5");
    assert_eq!(body["status"], "RESOLVIDO");
    assert_eq!(body["dataResolucao"], "2020/12/27 20:02:37");
    // The creation timestamp was not in the payload and must survive
    assert_eq!(body["data"], "2020/11/02 08:15:00");
    Ok(())
}

#[tokio::test]
async fn partial_update_touches_only_named_fields() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let payload = json!({
        "status": "RESOLVIDO",
        "dataResolucao": "2020/12/20 10:00:00"
    });

    let (status, body) =
        common::request(&app, "PUT", "/empresas/6", Some(&token), Some(payload)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "RESOLVIDO");
    assert_eq!(body["comentario"], "Vazamento de óleo no setor 4");
    assert_eq!(body["nivelPerigo"], "WARNING");
    Ok(())
}

#[tokio::test]
async fn resolving_without_a_date_stamps_one_and_reopening_clears_it() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let (status, body) = common::request(
        &app,
        "PUT",
        "/empresas/7",
        Some(&token),
        Some(json!({"status": "RESOLVIDO"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["dataResolucao"].is_string(),
        "expected a stamped resolution date, got: {}",
        body
    );

    let (status, body) = common::request(
        &app,
        "PUT",
        "/empresas/7",
        Some(&token),
        Some(json!({"status": "ABERTO"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["dataResolucao"].is_null(), "body: {}", body);
    Ok(())
}

#[tokio::test]
async fn updating_unknown_id_is_404() -> Result<()> {
    let app = common::test_app();
    let token = common::tal_token();

    let (status, body) = common::request(
        &app,
        "PUT",
        "/empresas/999",
        Some(&token),
        Some(json!({"status": "RESOLVIDO"})),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}
