#[tokio::main]
async fn main() {
    chalet_backend::run().await;
}
