use aws_sdk_s3::Client;

/// Build an S3 client for a region, optionally from a named AWS profile.
pub async fn build_client(region: &str, profile: Option<&str>) -> Client {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }

    let config = builder.load().await;
    Client::new(&config)
}
