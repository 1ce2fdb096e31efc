//! Pure renderers for every generated artifact.
//!
//! Each function maps scalar request fields to the literal content of one
//! file in the generated project. They perform no I/O, read no clock, and
//! are byte-deterministic, so the whole module is unit-testable without a
//! filesystem.
//!
//! Inputs are trusted and spliced verbatim — no escaping, no validation. A
//! malformed `domain_name` or dependency block produces a malformed (but
//! never rejected) build descriptor.

use crate::models::ProjectRequest;

/// One rendered file: a forward-slash relative path and its content.
///
/// The path determines both the file's location under the staging root and
/// its entry name inside the archive.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Convert a dot-separated package name into a relative directory path.
pub fn package_path(package_name: &str) -> String {
    package_name.replace('.', "/")
}

/// Render the Maven build descriptor (`pom.xml`).
///
/// `dependencies` lands inside the `<dependencies>` block ahead of the two
/// fixed starters (web, test).
pub fn build_descriptor(domain_name: &str, dependencies: &str) -> String {
    format!(
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
                             http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <groupId>{domain_name}</groupId>
    <artifactId>demo</artifactId>
    <version>1.0.0</version>
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>2.6.2</version>
        <relativePath/> <!-- lookup parent from repository -->
    </parent>
    <dependencies>
{dependencies}        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>"#
    )
}

const ENTRY_POINT_BODY: &str = r#"import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class Application {
    public static void main(String[] args) {
        SpringApplication.run(Application.class, args);
    }
}"#;

/// Render the application entry point with `package_name` as its package
/// declaration.
pub fn entry_point(package_name: &str) -> String {
    format!("package {package_name};\n\n{ENTRY_POINT_BODY}")
}

/// Fixed application configuration.
pub fn application_properties() -> &'static str {
    "spring.application.name=demo\nserver.port=8080"
}

/// Render the README with the request's description under a fixed heading.
pub fn readme(description: &str) -> String {
    format!("# Project Description\n\n{description}")
}

pub fn gitignore() -> &'static str {
    "target/\n*.log\n*.class\n.classpath\n.project\n.settings/\n*.iml\n*.ipr\n*.iws"
}

pub fn help() -> &'static str {
    "# Help\n\nThis is a generated Spring Boot project. Use `mvnw` or `mvnw.cmd` to build the project."
}

/// Pinned build-tool distribution for the wrapper.
pub fn wrapper_properties() -> &'static str {
    "distributionUrl=https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/3.6.3/apache-maven-3.6.3-bin.zip"
}

pub fn wrapper_script_unix() -> &'static str {
    "#!/bin/sh\nBASEDIR=$(dirname \"$0\")\njava -jar \"$BASEDIR/.mvn/wrapper/maven-wrapper.jar\" \"$@\""
}

pub fn wrapper_script_windows() -> &'static str {
    "@echo off\nsetlocal\nset BASEDIR=%~dp0\njava -jar \"%BASEDIR%\\.mvn\\wrapper\\maven-wrapper.jar\" %*"
}

/// Assemble the full fixed file set for one request.
pub fn project_files(request: &ProjectRequest) -> Vec<GeneratedFile> {
    let package_dir = package_path(&request.package_name);

    vec![
        GeneratedFile::new(
            "pom.xml",
            build_descriptor(&request.domain_name, &request.dependencies),
        ),
        GeneratedFile::new(
            format!("src/main/{package_dir}/Application"),
            entry_point(&request.package_name),
        ),
        GeneratedFile::new(
            "src/main/resources/application.properties",
            application_properties(),
        ),
        GeneratedFile::new("README.md", readme(&request.description)),
        GeneratedFile::new(".gitignore", gitignore()),
        GeneratedFile::new("Help.md", help()),
        GeneratedFile::new(".mvn/wrapper/maven-wrapper.properties", wrapper_properties()),
        GeneratedFile::new("mvnw", wrapper_script_unix()),
        GeneratedFile::new("mvnw.cmd", wrapper_script_windows()),
    ]
}
