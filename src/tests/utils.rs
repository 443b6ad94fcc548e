use crate::config::CacheConfig;
use crate::db::{init_db, Database};
use crate::services::{CacheService, PropertyClient, PropertyService, ProviderSlot};
use crate::state::AppState;
use astra::{Body, Response};
use std::io::Read;
use std::ops::Deref;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// File-backed DB initialized from the production schema.
/// The directory, journal files included, is removed on drop.
pub struct TestDb {
    db: Database,
    dir: TempDir,
}

impl TestDb {
    pub fn database(&self) -> Database {
        self.db.clone()
    }
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::Builder::new()
        .prefix("property_lookup_test_")
        .tempdir()
        .expect("create temp dir");
    let path = dir.path().join("cache.sqlite");

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    TestDb { db, dir }
}

/// A `CacheService` over a throwaway DB; derefs to the service.
pub struct TestCache {
    cache: CacheService,
    _db: TestDb,
}

impl TestCache {
    pub fn service(&self) -> CacheService {
        self.cache.clone()
    }
}

impl Deref for TestCache {
    type Target = CacheService;

    fn deref(&self) -> &CacheService {
        &self.cache
    }
}

pub fn test_cache() -> TestCache {
    let db = init_test_db();
    TestCache {
        cache: CacheService::new(db.database(), &CacheConfig::default()),
        _db: db,
    }
}

/// `AppState` that keeps its cache DB alive; derefs to the state.
pub struct TestApp {
    app: AppState,
    _dir: TempDir,
}

impl Deref for TestApp {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.app
    }
}

/// App wired to the given provider slots; the search client points at `backend`.
pub fn test_app(cache: TestCache, slots: Vec<ProviderSlot>, backend: &str) -> TestApp {
    let TestCache { cache, _db: db } = cache;
    let client = PropertyClient::new(backend, Duration::from_secs(5)).expect("client builds");
    TestApp {
        app: AppState::new(PropertyService::new(cache, slots), client),
        _dir: db.dir,
    }
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("body is utf-8");
    body
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// wiremock server for the blocking clients under test.
/// Mocks mounted with `.expect(n)` are verified when this drops.
pub struct MockHttp {
    server: MockServer,
    rt: Runtime,
}

impl MockHttp {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn received(&self) -> Vec<wiremock::Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}
