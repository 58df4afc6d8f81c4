/// The document every filter mode is checked against.
pub const REFERENCE_DOCUMENT: &str = concat!(
    "<document><?foo?><p>A paragraph</p> <p>A paragraph</p> some text ",
    "<p>Another paragraph</p><!--comment-->",
    "<documentation xmlns='http://www.w3.org/ns/xproc'>some doc</documentation></document>",
);

/// A pipeline exercising documentation, use-when on pipeline and foreign
/// elements, and nested content under excluded elements.
pub const CONDITIONAL_PIPELINE: &str = r#"<p:declare-step xmlns:p="http://www.w3.org/ns/xproc" version="3.0">
  <!-- inputs -->
  <p:input port="source"/>
  <p:documentation>
    <p>Copies its input, optionally validating it first.</p>
  </p:documentation>
  <p:validate-with-relax-ng use-when="$validate">
    <p:with-input port="schema" href="schema.rng"/>
  </p:validate-with-relax-ng>
  <p:identity use-when="not($validate)"/>
  <p:xslt>
    <p:with-input port="stylesheet">
      <xsl:stylesheet xmlns:xsl="http://www.w3.org/1999/XSL/Transform" p:use-when="$debug" version="1.0"/>
      <fallback use-when="ignored">kept</fallback>
    </p:with-input>
  </p:xslt>
  <?processing hint?>
</p:declare-step>"#;

/// A deeper document for checking the refinement properties on every axis.
pub const MIXED_DOCUMENT: &str = r#"<root xmlns:p="http://www.w3.org/ns/xproc" a="1">
  <?pi one?>
  <first>text <!-- c1 --> more<inner>  </inner></first>
  <p:documentation>doc <b>bold</b></p:documentation>
  <second p:use-when="true()">
    <leaf/>
    tail
  </second>
  <!-- c2 -->
  <third/>
</root>"#;
