// Synthetic response catalogue.
//
// Given an endpoint path and HTTP method, produce a structurally valid
// stand-in for what the registry service would have returned. Dispatch is an
// explicit ordered table evaluated first-match-wins on (method, substring),
// so more specific patterns must precede their prefixes: `/dvla/vehicles`
// before `/vehicles`, `/analytics/violations` before `/violations`.
//
// Generation is pure and deterministic given (path, method, time): the same
// inputs always yield the same payload, and only timestamp-derived fields
// vary between calls. The catalogue never fails — unknown endpoints degrade
// to a benign empty list or a generic success.

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde_json::{Value, json};

use crate::portal::Portal;

/// Inputs a generator may draw on. Everything here is derived from the
/// request itself plus the clock; generators hold no state of their own.
pub struct RouteContext<'a> {
    /// Raw endpoint path as passed to the client.
    pub path: &'a str,
    /// Portal inferred from the path prefix.
    pub portal: Portal,
    /// Current UTC time, injected so tests can pin it.
    pub now: DateTime<Utc>,
}

type Generator = fn(&RouteContext<'_>) -> Value;

struct SyntheticRoute {
    method: Method,
    pattern: &'static str,
    generate: Generator,
}

/// Ordered dispatch table. First match wins.
static ROUTES: &[SyntheticRoute] = &[
    SyntheticRoute { method: Method::POST, pattern: "/auth/login", generate: login },
    SyntheticRoute { method: Method::POST, pattern: "/auth/register", generate: register },
    SyntheticRoute { method: Method::POST, pattern: "/auth/logout", generate: success },
    SyntheticRoute { method: Method::GET, pattern: "/analytics/violations", generate: violation_stats },
    SyntheticRoute { method: Method::GET, pattern: "/analytics/officers", generate: officer_stats },
    SyntheticRoute { method: Method::GET, pattern: "/dvla/analytics", generate: dvla_analytics },
    SyntheticRoute { method: Method::GET, pattern: "/dvla/vehicles", generate: vehicle_list },
    SyntheticRoute { method: Method::POST, pattern: "/dvla/vehicles", generate: vehicle_created },
    SyntheticRoute { method: Method::PUT, pattern: "/dvla/vehicles", generate: vehicle_updated },
    SyntheticRoute { method: Method::DELETE, pattern: "/dvla/vehicles", generate: success },
    SyntheticRoute { method: Method::POST, pattern: "/dvla/renewals", generate: renewal_created },
    SyntheticRoute { method: Method::GET, pattern: "/dvla/fines", generate: fine_list },
    SyntheticRoute { method: Method::POST, pattern: "/dvla/fines", generate: fine_cleared },
    SyntheticRoute { method: Method::GET, pattern: "/vehicles/lookup", generate: vehicle_lookup },
    SyntheticRoute { method: Method::GET, pattern: "/vehicles", generate: vehicle_list },
    SyntheticRoute { method: Method::POST, pattern: "/approve", generate: violation_approved },
    SyntheticRoute { method: Method::POST, pattern: "/reject", generate: violation_rejected },
    SyntheticRoute { method: Method::GET, pattern: "/violations", generate: violation_list },
    SyntheticRoute { method: Method::POST, pattern: "/violations", generate: violation_created },
];

/// Produce the synthetic response for an endpoint/method pair.
pub fn respond(method: &Method, path: &str, now: DateTime<Utc>) -> Value {
    let ctx = RouteContext {
        path,
        portal: Portal::from_path(path),
        now,
    };
    for route in ROUTES {
        if route.method == *method && path.contains(route.pattern) {
            return (route.generate)(&ctx);
        }
    }
    // Benign-empty default: unknown collection endpoints read as empty,
    // anything else as a generic success.
    if path.contains("vehicles") || path.contains("violations") {
        json!([])
    } else {
        json!({ "success": true })
    }
}

// ── Auth ─────────────────────────────────────────────────────────────

fn login(ctx: &RouteContext<'_>) -> Value {
    let role = ctx.portal.role();
    json!({
        "token": format!("offline-{role}-{}", ctx.now.timestamp()),
        "role": role,
        "user": {
            "id": 0,
            "username": format!("demo.{role}"),
            "role": role,
        },
        "issued_at": ctx.now.to_rfc3339(),
    })
}

fn register(ctx: &RouteContext<'_>) -> Value {
    json!({
        "success": true,
        "status": "registered",
        "message": format!("account created for the {} console", ctx.portal.as_str()),
    })
}

fn success(_ctx: &RouteContext<'_>) -> Value {
    json!({ "success": true })
}

// ── Vehicles ─────────────────────────────────────────────────────────

/// The fixed vehicle catalogue backing every vehicle-shaped endpoint.
/// Ordered by id; registrations are stable so lookups stay deterministic.
fn vehicle_catalogue() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "reg_number": "LD63 KWF",
            "owner_name": "Amara Osei",
            "make": "Ford",
            "model": "Focus",
            "colour": "Blue",
            "year": 2013,
            "status": "active",
            "tax_status": "taxed",
            "mot_status": "valid",
            "registration_expires": "2026-03-31",
        }),
        json!({
            "id": 2,
            "reg_number": "RV19 XTC",
            "owner_name": "Dafydd Pryce",
            "make": "Vauxhall",
            "model": "Corsa",
            "colour": "Silver",
            "year": 2019,
            "status": "active",
            "tax_status": "taxed",
            "mot_status": "valid",
            "registration_expires": "2026-07-14",
        }),
        json!({
            "id": 3,
            "reg_number": "WN08 JDH",
            "owner_name": "Harriet Cole",
            "make": "BMW",
            "model": "320d",
            "colour": "Black",
            "year": 2008,
            "status": "sorn",
            "tax_status": "untaxed",
            "mot_status": "expired",
            "registration_expires": "2024-11-02",
        }),
        json!({
            "id": 4,
            "reg_number": "KT17 URB",
            "owner_name": "Sofia Marin",
            "make": "Toyota",
            "model": "Prius",
            "colour": "White",
            "year": 2017,
            "status": "expired",
            "tax_status": "untaxed",
            "mot_status": "valid",
            "registration_expires": "2025-01-20",
        }),
    ]
}

fn vehicle_list(_ctx: &RouteContext<'_>) -> Value {
    Value::Array(vehicle_catalogue())
}

fn vehicle_lookup(ctx: &RouteContext<'_>) -> Value {
    let wanted = normalize_reg(ctx.path.rsplit('/').next().unwrap_or(""));
    let catalogue = vehicle_catalogue();
    catalogue
        .iter()
        .find(|v| {
            v.get("reg_number")
                .and_then(Value::as_str)
                .is_some_and(|reg| normalize_reg(reg) == wanted)
        })
        .or_else(|| catalogue.first())
        .cloned()
        .unwrap_or_else(|| json!({}))
}

fn normalize_reg(reg: &str) -> String {
    reg.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

fn vehicle_created(ctx: &RouteContext<'_>) -> Value {
    json!({
        "id": 9101,
        "reg_number": "AK23 ZRP",
        "owner_name": "Pending Owner",
        "make": "Unknown",
        "model": "Unknown",
        "colour": "Unknown",
        "year": 0,
        "status": "active",
        "created_at": ctx.now.to_rfc3339(),
    })
}

fn vehicle_updated(ctx: &RouteContext<'_>) -> Value {
    json!({
        "id": 9101,
        "reg_number": "AK23 ZRP",
        "owner_name": "Pending Owner",
        "make": "Unknown",
        "model": "Unknown",
        "colour": "Unknown",
        "year": 0,
        "status": "active",
        "updated_at": ctx.now.to_rfc3339(),
    })
}

// ── Violations ───────────────────────────────────────────────────────

fn violation_list(ctx: &RouteContext<'_>) -> Value {
    json!([
        {
            "id": 7001,
            "reg_number": "WN08 JDH",
            "violation_type": "speeding",
            "location": "A40 westbound",
            "description": "47 in a 30 zone",
            "officer_name": "PC Adeyemi",
            "status": "pending",
            "fine_amount": 100.0,
            "recorded_at": (ctx.now - Duration::days(1)).to_rfc3339(),
        },
        {
            "id": 7002,
            "reg_number": "KT17 URB",
            "violation_type": "red_light",
            "location": "Mill Lane junction",
            "description": "Crossed on red at 08:14",
            "officer_name": "PC Brennan",
            "status": "approved",
            "fine_amount": 100.0,
            "recorded_at": (ctx.now - Duration::days(3)).to_rfc3339(),
        },
        {
            "id": 7003,
            "reg_number": "RV19 XTC",
            "violation_type": "parking",
            "location": "High Street",
            "description": "Double yellow lines",
            "officer_name": "PC Adeyemi",
            "status": "rejected",
            "fine_amount": 35.0,
            "recorded_at": (ctx.now - Duration::days(6)).to_rfc3339(),
        },
    ])
}

fn violation_created(ctx: &RouteContext<'_>) -> Value {
    json!({
        "id": 9301,
        "reg_number": "LD63 KWF",
        "violation_type": "speeding",
        "location": "Unrecorded",
        "officer_name": "PC Adeyemi",
        "status": "pending",
        "fine_amount": 100.0,
        "recorded_at": ctx.now.to_rfc3339(),
    })
}

fn violation_approved(_ctx: &RouteContext<'_>) -> Value {
    json!({ "success": true, "status": "approved" })
}

fn violation_rejected(_ctx: &RouteContext<'_>) -> Value {
    json!({ "success": true, "status": "rejected" })
}

// ── DVLA fines & renewals ────────────────────────────────────────────

fn fine_list(ctx: &RouteContext<'_>) -> Value {
    json!([
        {
            "id": 501,
            "reg_number": "WN08 JDH",
            "amount": 160.0,
            "reason": "No valid MOT",
            "status": "outstanding",
            "issued_at": (ctx.now - Duration::days(30)).to_rfc3339(),
        },
        {
            "id": 502,
            "reg_number": "KT17 URB",
            "amount": 80.0,
            "reason": "Expired registration",
            "status": "outstanding",
            "issued_at": (ctx.now - Duration::days(12)).to_rfc3339(),
        },
        {
            "id": 503,
            "reg_number": "LD63 KWF",
            "amount": 60.0,
            "reason": "Late renewal",
            "status": "cleared",
            "issued_at": (ctx.now - Duration::days(90)).to_rfc3339(),
        },
    ])
}

fn fine_cleared(_ctx: &RouteContext<'_>) -> Value {
    json!({ "success": true, "status": "cleared" })
}

fn renewal_created(ctx: &RouteContext<'_>) -> Value {
    json!({
        "id": 9201,
        "reg_number": "LD63 KWF",
        "status": "submitted",
        "submitted_at": ctx.now.to_rfc3339(),
        "expires_at": (ctx.now + Duration::days(365)).to_rfc3339(),
    })
}

// ── Analytics ────────────────────────────────────────────────────────

fn dvla_analytics(ctx: &RouteContext<'_>) -> Value {
    json!({
        "total_vehicles": 4,
        "active_registrations": 2,
        "expired_registrations": 1,
        "sorn_vehicles": 1,
        "renewals_this_month": 1,
        "fines_outstanding": 2,
        "generated_at": ctx.now.to_rfc3339(),
    })
}

fn violation_stats(_ctx: &RouteContext<'_>) -> Value {
    json!({
        "total": 3,
        "pending": 1,
        "approved": 1,
        "rejected": 1,
        "by_type": {
            "speeding": 1,
            "red_light": 1,
            "parking": 1,
        },
    })
}

fn officer_stats(_ctx: &RouteContext<'_>) -> Value {
    json!([
        {
            "officer_name": "PC Adeyemi",
            "violations_recorded": 2,
            "approved": 0,
            "rejected": 1,
        },
        {
            "officer_name": "PC Brennan",
            "violations_recorded": 1,
            "approved": 1,
            "rejected": 0,
        },
    ])
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::Value;

    use super::respond;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).expect("valid timestamp")
    }

    #[test]
    fn specific_patterns_win_over_prefixes() {
        // `/analytics/violations` contains `/violations` but must dispatch
        // to the stats generator, not the violation list.
        let stats = respond(&Method::GET, "/analytics/violations", at(1_700_000_000));
        assert!(stats.get("total").is_some(), "expected stats object: {stats}");

        let list = respond(&Method::GET, "/violations", at(1_700_000_000));
        assert!(list.is_array(), "expected violation list: {list}");
    }

    #[test]
    fn dvla_vehicle_list_is_nonempty_and_well_formed() {
        let value = respond(&Method::GET, "/dvla/vehicles", at(1_700_000_000));
        let list = value.as_array().expect("array");
        assert!(!list.is_empty());
        for vehicle in list {
            assert!(vehicle.get("reg_number").is_some());
            assert!(vehicle.get("owner_name").is_some());
            assert!(vehicle.get("status").is_some());
        }
    }

    #[test]
    fn lookup_serves_the_requested_registration() {
        let value = respond(&Method::GET, "/vehicles/lookup/WN08 JDH", at(1_700_000_000));
        assert_eq!(value["reg_number"], "WN08 JDH");
        assert_eq!(value["owner_name"], "Harriet Cole");
    }

    #[test]
    fn lookup_of_unknown_registration_degrades_to_first_record() {
        let value = respond(&Method::GET, "/vehicles/lookup/ZZ99 ZZZ", at(1_700_000_000));
        assert_eq!(value["reg_number"], "LD63 KWF");
    }

    #[test]
    fn same_inputs_yield_identical_payloads() {
        let a = respond(&Method::GET, "/dvla/fines", at(1_700_000_000));
        let b = respond(&Method::GET, "/dvla/fines", at(1_700_000_000));
        assert_eq!(a, b);
    }

    #[test]
    fn only_timestamp_fields_vary_across_calls() {
        let a = respond(&Method::POST, "/auth/login", at(1_700_000_000));
        let b = respond(&Method::POST, "/auth/login", at(1_700_086_400));
        let keys = |v: &Value| {
            v.as_object()
                .expect("object")
                .keys()
                .cloned()
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&a), keys(&b));
        assert_ne!(a["token"], b["token"]);
        assert_eq!(a["role"], b["role"]);
        assert_eq!(a["user"], b["user"]);
    }

    #[test]
    fn login_role_follows_portal_prefix() {
        let police = respond(&Method::POST, "/police/auth/login", at(1_700_000_000));
        assert_eq!(police["role"], "officer");
        assert!(
            police["token"]
                .as_str()
                .expect("token")
                .contains("officer")
        );

        let dvla = respond(&Method::POST, "/dvla/auth/login", at(1_700_000_000));
        assert_eq!(dvla["role"], "dvla_officer");

        let admin = respond(&Method::POST, "/auth/login", at(1_700_000_000));
        assert_eq!(admin["role"], "admin");
    }

    #[test]
    fn unknown_collection_endpoint_reads_as_empty() {
        let value = respond(&Method::POST, "/vehicles/import", at(1_700_000_000));
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn unknown_endpoint_reads_as_generic_success() {
        let value = respond(&Method::POST, "/audit/flush", at(1_700_000_000));
        assert_eq!(value, serde_json::json!({ "success": true }));
    }

    #[test]
    fn method_participates_in_dispatch() {
        // GET lists fines, POST on the same family clears one.
        let list = respond(&Method::GET, "/dvla/fines", at(1_700_000_000));
        assert!(list.is_array());

        let cleared = respond(&Method::POST, "/dvla/fines/501/clear", at(1_700_000_000));
        assert_eq!(cleared["status"], "cleared");
    }
}
