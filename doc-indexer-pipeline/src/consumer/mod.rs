//! Consumer module: extracts object references from event notifications.
//!
//! The wire shape of the notification batch belongs to the triggering
//! system; this module reduces it to the `(bucket, key)` pairs the rest of
//! the pipeline needs.

use aws_lambda_events::event::s3::S3Event;
use tracing::warn;

use doc_indexer_shared::ObjectRef;

/// Extract the object references carried by an event notification.
///
/// Keys are taken verbatim as delivered in the payload. Records that do not
/// name both a bucket and a key are logged and dropped; a malformed record
/// must not fail the batch.
pub fn object_refs(event: &S3Event) -> Vec<ObjectRef> {
    let mut refs = Vec::with_capacity(event.records.len());

    for record in &event.records {
        match (record.s3.bucket.name.as_deref(), record.s3.object.key.as_deref()) {
            (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => {
                refs.push(ObjectRef::new(bucket, key));
            }
            _ => {
                warn!(
                    event_name = record.event_name.as_deref().unwrap_or_default(),
                    "Skipping notification record without bucket or key"
                );
            }
        }
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(bucket: &str, key: &str) -> serde_json::Value {
        serde_json::json!({
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "awsRegion": "us-east-1",
            "eventTime": "2024-01-01T00:00:00.000Z",
            "eventName": "ObjectCreated:Put",
            "userIdentity": { "principalId": "AWS:EXAMPLE" },
            "requestParameters": { "sourceIPAddress": "127.0.0.1" },
            "responseElements": {
                "x-amz-request-id": "EXAMPLE123456789",
                "x-amz-id-2": "EXAMPLE123/abcdefghijklmno/pqrstuvwxyz"
            },
            "s3": {
                "s3SchemaVersion": "1.0",
                "configurationId": "testConfigRule",
                "bucket": {
                    "name": bucket,
                    "ownerIdentity": { "principalId": "EXAMPLE" },
                    "arn": format!("arn:aws:s3:::{}", bucket)
                },
                "object": {
                    "key": key,
                    "size": 1024,
                    "eTag": "0123456789abcdef0123456789abcdef",
                    "sequencer": "0A1B2C3D4E5F678901"
                }
            }
        })
    }

    fn event_from(records: Vec<serde_json::Value>) -> S3Event {
        serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
    }

    #[test]
    fn extracts_bucket_and_key_pairs() {
        let event = event_from(vec![
            record_json("uploads", "a.txt"),
            record_json("uploads", "folder/b one.txt"),
        ]);

        let refs = object_refs(&event);

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], ObjectRef::new("uploads", "a.txt"));
        assert_eq!(refs[1], ObjectRef::new("uploads", "folder/b one.txt"));
    }

    #[test]
    fn drops_records_without_a_key() {
        let mut broken = record_json("uploads", "ignored");
        broken["s3"]["object"]
            .as_object_mut()
            .unwrap()
            .remove("key");

        let event = event_from(vec![record_json("uploads", "kept.txt"), broken]);

        let refs = object_refs(&event);

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "kept.txt");
    }

    #[test]
    fn empty_batch_yields_no_references() {
        let event = event_from(vec![]);

        assert!(object_refs(&event).is_empty());
    }
}
