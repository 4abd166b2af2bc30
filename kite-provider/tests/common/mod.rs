//! Shared resource types and handlers for provider tests.

#![allow(dead_code)]

use kite_provider::kite_schema::{PropertyOptions, kite_resource};
use kite_provider::{HandlerBase, HandlerResult, ProviderError, ResourceHandler, SchemaAware};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ── Resource types ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vpc {
    pub cidr_block: String,
    pub enable_dns: Option<bool>,
    pub vpc_id: Option<String>,
    pub arn: Option<String>,
}

kite_resource!(Vpc as "Vpc" {
    cidr_block: String => PropertyOptions::new().rename("cidr").required().input(),
    enable_dns: Option<bool> => PropertyOptions::new().default_value(true),
    #[cloud]
    vpc_id: Option<String> => PropertyOptions::new().importable(),
    #[cloud]
    arn: Option<String>,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bucket {
    pub name: String,
    pub region: String,
}

kite_resource!(Bucket as "Bucket" {
    name: String => PropertyOptions::new().required().importable(),
    region: String,
});

/// Declares a different Rust type under the name "Bucket".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegacyBucket {
    pub bucket_name: String,
}

kite_resource!(LegacyBucket as "Bucket" {
    bucket_name: String,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Untyped {
    pub name: String,
}

kite_resource!(Untyped {
    name: String,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Named {
    pub name: String,
}

kite_resource!(Named as "Named" {
    name: String,
});

pub fn named(name: &str) -> Named {
    Named {
        name: name.to_string(),
    }
}

// ── Handlers ─────────────────────────────────────────────────────

/// In-memory VPC handler keyed by the cloud-assigned id.
pub struct VpcHandler {
    base: HandlerBase<Vpc>,
    store: Mutex<HashMap<String, Vpc>>,
    next_id: AtomicUsize,
}

impl VpcHandler {
    pub fn new() -> Self {
        Self {
            base: HandlerBase::inferred().expect("Vpc declaration is valid"),
            store: Mutex::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn stored(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    fn id_of(vpc: &Vpc) -> HandlerResult<String> {
        vpc.vpc_id
            .clone()
            .ok_or_else(|| ProviderError::NotFound("vpc without id".into()))
    }
}

impl ResourceHandler for VpcHandler {
    type Resource = Vpc;

    fn create(&self, mut vpc: Vpc) -> HandlerResult<Vpc> {
        if vpc.vpc_id.is_some() {
            self.base.ensure_mutable(["vpc_id"])?;
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = format!("vpc-{n}");
        vpc.vpc_id = Some(id.clone());
        vpc.arn = Some(format!("arn:aws:ec2:vpc/{id}"));
        self.store.lock().unwrap().insert(id, vpc.clone());
        Ok(vpc)
    }

    fn read(&self, vpc: Vpc) -> HandlerResult<Vpc> {
        let id = Self::id_of(&vpc)?;
        self.store
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ProviderError::NotFound(id))
    }

    fn update(&self, vpc: Vpc) -> HandlerResult<Vpc> {
        let id = Self::id_of(&vpc)?;
        let mut store = self.store.lock().unwrap();
        let prior = store.get(&id).cloned().ok_or_else(|| ProviderError::NotFound(id.clone()))?;
        self.base.validate_update(&prior, &vpc)?;

        let updated = Vpc {
            arn: prior.arn.clone(),
            ..vpc
        };
        store.insert(id, updated.clone());
        Ok(updated)
    }

    fn delete(&self, vpc: Vpc) -> HandlerResult<bool> {
        let Some(id) = vpc.vpc_id else {
            return Ok(false);
        };
        Ok(self.store.lock().unwrap().remove(&id).is_some())
    }
}

impl SchemaAware for VpcHandler {
    fn base(&self) -> &HandlerBase<Vpc> {
        &self.base
    }
}

/// Reads by appending a suffix; counts every read.
pub struct SuffixHandler {
    base: HandlerBase<Named>,
    pub reads: AtomicUsize,
    /// Reads of this name fail.
    pub poison: Option<String>,
}

impl SuffixHandler {
    pub fn new() -> Self {
        Self {
            base: HandlerBase::inferred().expect("Named declaration is valid"),
            reads: AtomicUsize::new(0),
            poison: None,
        }
    }

    pub fn poisoned(name: &str) -> Self {
        Self {
            poison: Some(name.to_string()),
            ..Self::new()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ResourceHandler for SuffixHandler {
    type Resource = Named;

    fn create(&self, resource: Named) -> HandlerResult<Named> {
        Ok(resource)
    }

    fn read(&self, resource: Named) -> HandlerResult<Named> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.poison.as_deref() == Some(resource.name.as_str()) {
            return Err(anyhow::anyhow!("backend refused to read {}", resource.name).into());
        }
        Ok(Named {
            name: format!("{}-read", resource.name),
        })
    }

    fn update(&self, resource: Named) -> HandlerResult<Named> {
        Ok(resource)
    }

    fn delete(&self, _resource: Named) -> HandlerResult<bool> {
        Ok(false)
    }
}

impl SchemaAware for SuffixHandler {
    fn base(&self) -> &HandlerBase<Named> {
        &self.base
    }
}

pub struct BucketHandler {
    base: HandlerBase<Bucket>,
}

impl BucketHandler {
    pub fn new() -> Self {
        Self {
            base: HandlerBase::inferred().expect("Bucket declaration is valid"),
        }
    }
}

impl ResourceHandler for BucketHandler {
    type Resource = Bucket;

    fn create(&self, resource: Bucket) -> HandlerResult<Bucket> {
        Ok(resource)
    }

    fn read(&self, resource: Bucket) -> HandlerResult<Bucket> {
        Ok(resource)
    }

    fn update(&self, resource: Bucket) -> HandlerResult<Bucket> {
        Ok(resource)
    }

    fn delete(&self, _resource: Bucket) -> HandlerResult<bool> {
        Ok(true)
    }
}

impl SchemaAware for BucketHandler {
    fn base(&self) -> &HandlerBase<Bucket> {
        &self.base
    }
}
