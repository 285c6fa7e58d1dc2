pub mod fixtures;

use fixtures::*;
use lwm2m_client::node::ResourceValue;
use lwm2m_client::prelude::*;
use lwm2m_client::{ObjectListener, SharedInstance};
use lwm2m_model::catalog::DEVICE;
use lwm2m_model::LwM2mModel;
use parking_lot::Mutex;
use std::sync::Arc;

fn device() -> ObjectEnabler {
    let initializer = ObjectsInitializer::builder(LwM2mModel::core()).build();
    initializer.create(&[DEVICE]).unwrap().remove(0)
}

fn simple(instance: &SharedInstance) -> parking_lot::MappedRwLockReadGuard<'_, SimpleInstanceEnabler> {
    parking_lot::RwLockReadGuard::map(instance.read(), |i| {
        i.downcast_ref::<SimpleInstanceEnabler>().expect("simple enabler")
    })
}

#[test]
fn readable_resources_are_seeded_with_defaults() {
    let device = device();

    let manufacturer = device.read(0, 0);
    assert_eq!(manufacturer.code, ResponseCode::Content);
    assert_eq!(manufacturer.content, Some(LwM2mResource::single(0, Value::String(String::new()))));

    let error_codes = device.read(0, 11).content.expect("error codes");
    assert_eq!(error_codes.value, ResourceValue::Multiple(std::collections::BTreeMap::new()));
}

#[test]
fn read_rejects_unknown_and_non_readable_resources() {
    let device = device();
    assert_eq!(device.read(0, 99).code, ResponseCode::NotFound);
    assert_eq!(device.read(0, 4).code, ResponseCode::MethodNotAllowed);
    assert_eq!(device.read(1, 0).code, ResponseCode::NotFound);
}

#[test]
fn write_checks_operations_and_types() {
    let device = device();

    let time = LwM2mResource::single(13, Value::Time(1_700_000_000));
    assert_eq!(device.write(0, 13, time.clone()).code, ResponseCode::Changed);
    assert_eq!(device.read(0, 13).content, Some(time));

    let wrong_type = LwM2mResource::single(13, Value::String("noon".into()));
    assert_eq!(device.write(0, 13, wrong_type).code, ResponseCode::BadRequest);

    let mismatched_id = LwM2mResource::single(14, Value::String("+01".into()));
    assert_eq!(device.write(0, 15, mismatched_id).code, ResponseCode::BadRequest);

    let read_only = LwM2mResource::single(0, Value::String("ACME".into()));
    assert_eq!(device.write(0, 0, read_only).code, ResponseCode::MethodNotAllowed);

    let unknown = LwM2mResource::single(99, Value::Integer(1));
    assert_eq!(device.write(0, 99, unknown).code, ResponseCode::NotFound);
}

#[test]
fn execute_follows_declared_operations() {
    let device = device();
    assert_eq!(device.execute(0, 4, &[]).code, ResponseCode::Changed);
    assert_eq!(device.execute(0, 0, &[]).code, ResponseCode::MethodNotAllowed);
    assert_eq!(device.execute(0, 99, &[]).code, ResponseCode::NotFound);
    assert_eq!(device.execute(7, 4, &[]).code, ResponseCode::NotFound);
}

#[test]
fn unbound_simple_enabler_finds_nothing() {
    let mut enabler = SimpleInstanceEnabler::new();
    assert_eq!(enabler.read(0).code, ResponseCode::NotFound);
    assert_eq!(
        enabler.write(0, LwM2mResource::single(0, Value::Integer(1))).code,
        ResponseCode::NotFound
    );
    assert_eq!(enabler.execute(0, &[]).code, ResponseCode::NotFound);
}

#[test]
fn default_handlers_answer_method_not_allowed() {
    let mut wired = WiredEnabler::new(1);
    assert_eq!(wired.read(0).code, ResponseCode::MethodNotAllowed);
    assert_eq!(
        wired.write(0, LwM2mResource::single(0, Value::Integer(1))).code,
        ResponseCode::MethodNotAllowed
    );
    assert_eq!(wired.execute(0, &[]).code, ResponseCode::Changed);
}

#[test]
fn listeners_receive_changes_with_their_instance() {
    let device = device();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let listener: ObjectListener = Arc::new(move |object_id: u16, instance_id: u16, ids: &[u16]| {
        sink.lock().push((object_id, instance_id, ids.to_vec()));
    });
    device.add_listener(listener);

    let offset = LwM2mResource::single(14, Value::String("+02:00".into()));
    assert_eq!(device.write(0, 14, offset.clone()).code, ResponseCode::Changed);
    assert_eq!(device.write(0, 14, offset).code, ResponseCode::Changed);

    assert_eq!(*seen.lock(), vec![(DEVICE, 0, vec![14])], "unchanged values are not reported");
}

#[test]
fn device_side_updates_bypass_operations() {
    let device = device();
    let instance = device.instance(0).expect("instance 0");

    instance
        .write()
        .downcast_mut::<SimpleInstanceEnabler>()
        .expect("simple enabler")
        .set_resource(LwM2mResource::single(0, Value::String("ACME".into())));

    assert_eq!(
        simple(instance).resource(0),
        Some(&LwM2mResource::single(0, Value::String("ACME".into())))
    );
    assert_eq!(
        device.read(0, 0).content,
        Some(LwM2mResource::single(0, Value::String("ACME".into())))
    );
}

#[test]
fn custom_enablers_serve_requests_through_the_object_enabler() {
    let mut builder = ObjectsInitializer::builder(test_model());
    builder.register_type::<CountingEnabler>(SINGLE_MANDATORY).unwrap();
    let enabler = builder.build().create(&[SINGLE_MANDATORY]).unwrap().remove(0);

    assert_eq!(enabler.read(0, 7).content, Some(LwM2mResource::single(7, Value::Integer(1))));
    assert_eq!(enabler.read(0, 7).content, Some(LwM2mResource::single(7, Value::Integer(2))));
    assert_eq!(enabler.execute(0, 1, &[]).code, ResponseCode::MethodNotAllowed);
}

#[test]
fn response_codes_render_coap_notation() {
    assert_eq!(ResponseCode::Content.to_string(), "2.05 Content");
    assert_eq!(ResponseCode::MethodNotAllowed.as_str(), "4.05");
    assert!(ResponseCode::Changed.is_success());
    assert!(!ResponseCode::NotFound.is_success());
}

#[test]
fn listeners_accumulate_on_a_shared_instance() {
    let mut builder = ObjectsInitializer::builder(LwM2mModel::core());
    builder.register_instance(DEVICE, SimpleInstanceEnabler::new()).unwrap();
    let initializer = builder.build();

    let first = initializer.create(&[DEVICE]).unwrap().remove(0);
    let second = initializer.create(&[DEVICE]).unwrap().remove(0);

    let calls = Arc::new(Mutex::new(0_usize));
    for enabler in [&first, &second] {
        let calls = Arc::clone(&calls);
        enabler.add_listener(Arc::new(move |_: u16, _: u16, _: &[u16]| *calls.lock() += 1));
    }

    let offset = LwM2mResource::single(14, Value::String("+01:00".into()));
    assert_eq!(first.write(0, 14, offset).code, ResponseCode::Changed);
    assert_eq!(*calls.lock(), 2, "both subscriptions live on the one instance");
}
