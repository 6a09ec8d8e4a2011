// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Liveness and route discovery.

use axum::Json;
use serde::Serialize;

const SERVICE: &str = "floorplan-lite-server";

/// One routed path; aliases get their own entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    /// Path this one duplicates, if it is an alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<&'static str>,
    pub summary: &'static str,
}

const fn route(method: &'static str, path: &'static str, summary: &'static str) -> Route {
    Route {
        method,
        path,
        alias_of: None,
        summary,
    }
}

const fn alias(path: &'static str, of: Route) -> Route {
    Route {
        path,
        alias_of: Some(of.path),
        ..of
    }
}

const MASKS: Route = route(
    "POST",
    "/generate_masks",
    "Boundary, self and generative corner masks with heat-map PNGs",
);
const PLOT: Route = route(
    "POST",
    "/plot_polygons",
    "PNG of sample 0 from an uploaded npz_file `houses` batch",
);

/// Every route registered by [`crate::app`].
pub const ROUTES: &[Route] = &[
    route("GET", "/", "This route table"),
    route("GET", "/api/v1/health", "Liveness check"),
    MASKS,
    alias("/api/v1/masks", MASKS),
    PLOT,
    alias("/api/v1/polygons", PLOT),
    route(
        "POST",
        "/api/v1/polygons/json",
        "Decoded room polygons from a JSON `houses` batch",
    ),
];

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub routes: &'static [Route],
}

/// GET /api/v1/health
pub async fn check() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTES,
    })
}
