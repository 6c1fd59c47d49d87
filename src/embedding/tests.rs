use super::*;

#[tokio::test]
async fn test_stub_is_deterministic() {
    let embedder = StubEmbedder::new(64).unwrap();

    let a = embedder.embed("climate fintech seed").await.unwrap();
    let b = embedder.embed("climate fintech seed").await.unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn test_stub_differs_per_text() {
    let embedder = StubEmbedder::new(64).unwrap();

    let a = embedder.embed("ocean plastics").await.unwrap();
    let b = embedder.embed("enterprise saas").await.unwrap();

    assert_ne!(a, b);
}

#[tokio::test]
async fn test_stub_dimension_and_unit_norm() {
    let embedder = StubEmbedder::new(384).unwrap();
    let embedding = embedder.embed("hello world").await.unwrap();

    assert_eq!(embedding.len(), 384);
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
}

#[test]
fn test_stub_rejects_zero_dimension() {
    assert!(matches!(
        StubEmbedder::new(0),
        Err(EmbeddingError::InvalidConfig { .. })
    ));
}

#[tokio::test]
async fn test_backend_delegates_to_stub() {
    let stub = StubEmbedder::new(16).unwrap();
    let expected = stub.embed("text").await.unwrap();

    let backend = EmbedderBackend::Stub(stub);
    assert!(backend.is_stub());
    assert_eq!(backend.dimension(), 16);
    assert_eq!(backend.embed("text").await.unwrap(), expected);
}

#[test]
fn test_l2_normalize_leaves_zero_vector() {
    let mut v = vec![0.0f32; 4];
    l2_normalize(&mut v);
    assert_eq!(v, vec![0.0; 4]);

    let mut v = vec![3.0f32, 4.0];
    l2_normalize(&mut v);
    assert!((v[0] - 0.6).abs() < 1e-6);
    assert!((v[1] - 0.8).abs() < 1e-6);
}
