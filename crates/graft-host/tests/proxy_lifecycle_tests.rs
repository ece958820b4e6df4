// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs)]
use graft_core::{
    ComponentHandle, ComponentType, InteropError, ParameterValue, ParameterView,
    RenderCompletion, RendererPort, RootComponent, RootComponentConfiguration,
    RootComponentManager,
};
use graft_host::{enable_root_components, HostError, HostSession, RootComponents};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

struct GreeterComponent;
impl RootComponent for GreeterComponent {}

#[derive(Default)]
struct RecordingRenderer {
    next_handle: u32,
    added: Vec<(ComponentType, String)>,
    renders: Vec<(ComponentHandle, ParameterView)>,
    removed: Vec<ComponentHandle>,
}

impl RendererPort for RecordingRenderer {
    fn add_root_component(
        &mut self,
        component_type: &ComponentType,
        mount_target: &str,
    ) -> ComponentHandle {
        let handle = ComponentHandle(self.next_handle);
        self.next_handle += 1;
        self.added.push((*component_type, mount_target.to_owned()));
        handle
    }

    fn render_root_component(
        &mut self,
        handle: ComponentHandle,
        parameters: ParameterView,
    ) -> RenderCompletion {
        self.renders.push((handle, parameters));
        Box::pin(std::future::ready(Ok(())))
    }

    fn remove_root_component(&mut self, handle: ComponentHandle) {
        self.removed.push(handle);
    }
}

type SharedGreeterManager = Arc<Mutex<RootComponentManager<RecordingRenderer>>>;

fn greeter_manager() -> SharedGreeterManager {
    let mut config = RootComponentConfiguration::new();
    config.register::<GreeterComponent>("greeter").unwrap();
    Arc::new(Mutex::new(RootComponentManager::new(
        config.seal(),
        RecordingRenderer::default(),
    )))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

#[tokio::test]
async fn greeter_scenario_add_render_dispose() {
    let session = Arc::new(HostSession::new());
    let manager = greeter_manager();
    let registration = enable_root_components(&session, Arc::clone(&manager))
        .await
        .unwrap();
    assert!(registration.is_some());
    let root = RootComponents::new(Arc::clone(&session));

    let mut proxy = root.add("#target", "greeter").await.unwrap();
    assert_eq!(proxy.handle(), Some(ComponentHandle(0)));
    {
        let guard = manager.lock().await;
        assert!(guard.renderer().added[0].0.is::<GreeterComponent>());
        assert_eq!(guard.renderer().added[0].1, "#target");
    }

    let payload = object(json!({ "name": "Ada" }));
    proxy.set_parameters(&payload).await.unwrap();
    {
        let guard = manager.lock().await;
        let renders = &guard.renderer().renders;
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].0, ComponentHandle(0));
        assert_eq!(renders[0].1.len(), 1);
        assert_eq!(
            renders[0].1.get("name"),
            Some(&ParameterValue::String("Ada".into()))
        );
    }

    proxy.dispose().await.unwrap();
    assert_eq!(proxy.handle(), None);
    assert_eq!(
        manager.lock().await.renderer().removed,
        vec![ComponentHandle(0)]
    );

    // Second dispose is a local no-op: no second collaborator call.
    proxy.dispose().await.unwrap();
    assert_eq!(manager.lock().await.renderer().removed.len(), 1);
}

#[tokio::test]
async fn set_parameters_after_dispose_fails_locally() {
    let session = Arc::new(HostSession::new());
    let manager = greeter_manager();
    let _registration = enable_root_components(&session, Arc::clone(&manager))
        .await
        .unwrap();
    let root = RootComponents::new(Arc::clone(&session));

    let mut proxy = root.add("#target", "greeter").await.unwrap();
    proxy.dispose().await.unwrap();

    let err = proxy.set_parameters(&Map::new()).await.unwrap_err();
    assert_eq!(err, HostError::DisposedProxy);
    assert!(manager.lock().await.renderer().renders.is_empty());
}

#[tokio::test]
async fn enabling_twice_fails_with_already_initialized() {
    let session = Arc::new(HostSession::new());
    let registration = enable_root_components(&session, greeter_manager())
        .await
        .unwrap();
    assert!(registration.is_some());

    let err = enable_root_components(&session, greeter_manager())
        .await
        .unwrap_err();
    assert_eq!(err, HostError::AlreadyInitialized);
}

#[tokio::test]
async fn empty_whitelist_skips_publication() {
    let session = Arc::new(HostSession::new());
    let manager = Arc::new(Mutex::new(RootComponentManager::new(
        RootComponentConfiguration::new().seal(),
        RecordingRenderer::default(),
    )));

    let registration = enable_root_components(&session, manager).await.unwrap();

    assert!(registration.is_none());
    assert!(!session.is_enabled());
    let root = RootComponents::new(session);
    let err = root.add("#target", "greeter").await.unwrap_err();
    assert_eq!(err, HostError::ManagerNotEnabled);
}

#[tokio::test]
async fn add_before_enable_fails_with_manager_not_enabled() {
    let root = RootComponents::new(Arc::new(HostSession::new()));

    let err = root.add("#target", "greeter").await.unwrap_err();

    assert_eq!(err, HostError::ManagerNotEnabled);
}

#[tokio::test]
async fn unknown_identifier_surfaces_interop_error() {
    let session = Arc::new(HostSession::new());
    let _registration = enable_root_components(&session, greeter_manager())
        .await
        .unwrap();
    let root = RootComponents::new(session);

    let err = root.add("#target", "intruder").await.unwrap_err();

    assert_eq!(
        err,
        HostError::Interop(InteropError::UnknownComponentIdentifier {
            identifier: "intruder".into()
        })
    );
}

#[tokio::test]
async fn oversized_payload_is_rejected_by_count_bound() {
    let session = Arc::new(HostSession::new());
    let manager = greeter_manager();
    let _registration = enable_root_components(&session, Arc::clone(&manager))
        .await
        .unwrap();
    let root = RootComponents::new(Arc::clone(&session));
    let mut proxy = root.add("#target", "greeter").await.unwrap();

    let mut payload = Map::new();
    for i in 0..101 {
        payload.insert(format!("p{i}"), Value::from(i));
    }

    let err = proxy.set_parameters(&payload).await.unwrap_err();
    assert_eq!(
        err,
        HostError::Interop(InteropError::ParameterCountOutOfRange { count: 101 })
    );
    assert!(manager.lock().await.renderer().renders.is_empty());
}

#[tokio::test]
async fn revoking_the_registration_disables_outstanding_proxies() {
    let session = Arc::new(HostSession::new());
    let manager = greeter_manager();
    let registration = enable_root_components(&session, Arc::clone(&manager))
        .await
        .unwrap()
        .unwrap();
    let root = RootComponents::new(Arc::clone(&session));
    let mut proxy = root.add("#target", "greeter").await.unwrap();

    session.revoke_manager(registration);

    assert!(!session.is_enabled());
    let err = proxy.set_parameters(&Map::new()).await.unwrap_err();
    assert_eq!(err, HostError::ManagerNotEnabled);

    // The slot is free again: a fresh manager may be published.
    let second = enable_root_components(&session, greeter_manager())
        .await
        .unwrap();
    assert!(second.is_some());
}

#[tokio::test]
async fn disposed_manager_fails_proxy_calls_instead_of_no_op() {
    let session = Arc::new(HostSession::new());
    let manager = greeter_manager();
    let _registration = enable_root_components(&session, Arc::clone(&manager))
        .await
        .unwrap();
    let root = RootComponents::new(Arc::clone(&session));
    let mut proxy = root.add("#target", "greeter").await.unwrap();

    manager.lock().await.dispose();

    let err = proxy.set_parameters(&Map::new()).await.unwrap_err();
    assert_eq!(err, HostError::Interop(InteropError::ManagerDisposed));
}
