//! Document rendering: the generated pom and the HTML pages.

use std::fmt::Write;

use crate::models::{ArtifactRequest, NotFoundContext, PLACEHOLDER_VERSION};

/// Homepage served at `/` and `/index.html`
pub const INDEX_HTML: &str = r#"<html>
<head>
<title>Version 99 Does Not Exist</title>
</head>
<body>
<h1>Version 99 Does Not Exist</h1>
<p>Please see <a href="http://day-to-day-stuff.blogspot.com/2007/10/announcement-version-99-does-not-exist.html">the announcement</a> to read why Version 99 Does Not Exist and its predecessor no-commons-logging were created.</p>
<p>Version 99 Does Not Exist emulates a Maven 2 repository and serves empty jars for any valid package that has version number <i>99.0-does-not-exist</i>. It also generates poms and of course the appropriate hashes.</p>
<p>For example the following links will give an <a href="/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.jar">empty jar</a>, its <a href="/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.pom">pom</a> and its <a href="/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.jar.sha1">sha1 hash</a> for commons-logging.</p>
</body>
</html>
"#;

/// Render the generated pom for a classified artifact request.
///
/// The document declares the placeholder version and states that it is an
/// auto-generated stand-in unaffiliated with the real artifact.
pub fn render_pom(request: &ArtifactRequest) -> Result<String, std::fmt::Error> {
    let mut doc = String::new();
    write!(
        doc,
        r#"<?xml version="1.0" encoding="iso-8859-1"?>
<project>
	<modelVersion>4.0.0</modelVersion>
	<groupId>{group_id}</groupId>
	<artifactId>{artifact_id}</artifactId>
	<name>{name}</name>
	<version>{version}</version>
	<description>
		This is a generated pom. Version {version} is a dummy implementation which does nothing and has no dependencies.
		VERSION {version} IS NOT IN ANY WAY AFFILIATED WITH THE ORIGINAL DEVELOPERS of {group_id}.
	</description>
	<url>{info_url}</url>
</project>"#,
        group_id = request.group_id,
        artifact_id = request.artifact_id,
        name = request.name,
        version = PLACEHOLDER_VERSION,
        info_url = request.info_url,
    )?;
    Ok(doc)
}

/// Render the not-found page shown for any path outside the artifact grammar
pub fn render_not_found(context: &NotFoundContext) -> Result<String, std::fmt::Error> {
    let mut page = String::new();
    write!(
        page,
        r#"<html>
<body>
<h1>Version 99 Does Not Exist (Error 404)</h1>
<h2>Not Found: {requested_url}</h2>
<p>
<a href="{info_url}">Version 99 Does Not Exist</a> is a virtual Maven 2 repository.
It generates jars and poms for any artifact with version '{version}'.
</p>
</body>
</html>
"#,
        requested_url = context.requested_url,
        info_url = context.info_url,
        version = PLACEHOLDER_VERSION,
    )?;
    Ok(page)
}
