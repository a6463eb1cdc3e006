use crate::catalog::ControlCatalog;
use crate::error::Result;

/// A two-control slice of the 800-53 catalog: AC-1 carries exactly one
/// assignment placeholder, AC-2 carries none.
pub const SAMPLE_CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<controls:controls xmlns:controls="http://scap.nist.gov/schema/sp800-53/feed/2.0">
  <controls:control>
    <family>ACCESS CONTROL</family>
    <number>AC-1</number>
    <title>Access Control Policy and Procedures</title>
    <statement>
      <description>The organization reviews and updates the current access control policy [Assignment: organization-defined frequency].</description>
    </statement>
  </controls:control>
  <controls:control>
    <family>ACCESS CONTROL</family>
    <number>AC-2</number>
    <title>Account Management</title>
    <statement>
      <description>The organization identifies and selects accounts to support organizational missions.</description>
    </statement>
  </controls:control>
</controls:controls>
"#;

/// Parse [`SAMPLE_CATALOG`] into a catalog
pub fn sample_catalog() -> Result<ControlCatalog> {
    ControlCatalog::parse(SAMPLE_CATALOG)
}
