//! Static prompt text and deterministic message assembly.
//!
//! The instructional prompt and the worked examples are fixed; the only
//! variable inputs are the user's object description and, optionally, one
//! inline image. Assembly is pure, so the exact message list a request will
//! carry can be asserted in tests.

use crate::types::{ContentPart, EncodedImage, Message};

/// The leading fragment seeded into the assistant turn so the reply begins
/// inside the planning section. The model may or may not honor it.
pub const PLANNING_SEED: &str = "<model_planning>";

/// Two worked description-to-script examples, shown to the model ahead of
/// the instruction prompt.
pub const WORKED_EXAMPLES: &str = r#"<examples>
<example>
<description>
Generate a model of a hollow cylinder with a 5mm wall thickness
</description>
<ideal_output>
<model_planning>
1. Extract features and relationships:
   - Shape: cylinder (hollow)
   - Outer radius: 20 units
   - Wall thickness: 5 units
   - Height: 40 units
   - Relationship: cylinder is centered

2. Organize features into a structured plan:
   a. Create a scene, camera, and renderer
   b. Create a hollow cylinder using THREE.CylinderGeometry
   c. Position the cylinder at the center of the scene
   d. Set up lighting
   e. Set up animation loop

3. Basic structure of the Three.js script:
   - Import Three.js library
   - Set up scene, camera, and renderer
   - Create cylinder geometry and material
   - Add cylinder to the scene
   - Set up lighting
   - Define animation loop
   - Handle window resizing

4. Materials and textures:
   - Use MeshStandardMaterial for realistic lighting and shadows
   - Apply a metallic texture to give the cylinder a realistic appearance

5. Lighting setup:
   - Add ambient light for overall illumination
   - Add directional light for shadows and depth
   - Add point light inside the cylinder to highlight the hollow nature

6. Potential animations:
   - Rotate the cylinder to showcase its hollow structure

7. Potential challenges and solutions:
   - Creating a hollow cylinder: Use THREE.CylinderGeometry with inner radius
   - Ensuring the hollow part is visible: Use camera controls to allow user interaction

8. Summary of structured plan:
   The plan involves creating a scene with a hollow cylinder using Three.js. The cylinder will have an outer radius of 20 units, a wall thickness of 5 units, and a height of 40 units. It will be centered in the scene and use a metallic material. Lighting will be set up to properly illuminate the model, including the hollow interior. An animation will be added to rotate the model, and camera controls will allow for user interaction to better visualize the hollow structure.
</model_planning>

<threejs_output>
// Hollow Cylinder Model
// Dimensions: Outer radius 20 units, Wall thickness 5 units, Height 40 units

// Scene setup
const scene = new THREE.Scene();
const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
const renderer = new THREE.WebGLRenderer();
renderer.setSize(window.innerWidth, window.innerHeight);
document.body.appendChild(renderer.domElement);

// Cylinder
const outerRadius = 20;
const innerRadius = 15; // outer radius - wall thickness
const height = 40;
const radialSegments = 32;
const cylinderGeometry = new THREE.CylinderGeometry(outerRadius, outerRadius, height, radialSegments, 1, true, 0, Math.PI * 2);
const cylinderMaterial = new THREE.MeshStandardMaterial({
  color: 0x888888,
  metalness: 0.8,
  roughness: 0.2,
  side: THREE.DoubleSide
});
const cylinder = new THREE.Mesh(cylinderGeometry, cylinderMaterial);
scene.add(cylinder);

// Lighting
const ambientLight = new THREE.AmbientLight(0x404040);
scene.add(ambientLight);
const directionalLight = new THREE.DirectionalLight(0xffffff, 0.5);
directionalLight.position.set(1, 1, 1);
scene.add(directionalLight);
const pointLight = new THREE.PointLight(0xffffff, 0.5);
pointLight.position.set(0, 0, 0);
scene.add(pointLight);

// Camera position
camera.position.z = 100;

// Orbit controls
const controls = new THREE.OrbitControls(camera, renderer.domElement);

// Animation
function animate() {
  requestAnimationFrame(animate);
  cylinder.rotation.y += 0.01;
  controls.update();
  renderer.render(scene, camera);
}
animate();

// Handle window resizing
window.addEventListener('resize', function() {
  camera.aspect = window.innerWidth / window.innerHeight;
  camera.updateProjectionMatrix();
  renderer.setSize(window.innerWidth, window.innerHeight);
});
</threejs_output>
</ideal_output>
</example>
<example>
<description>
Create a dining table
</description>
<ideal_output>
<model_planning>
1. Extract features and relationships:
   - Main components: tabletop, legs, support structure
   - Standard dining table dimensions:
     * Tabletop: ~150cm length, ~90cm width, ~4cm thickness
     * Height: ~75cm (standard dining height)
     * Legs: ~8cm square thickness
     * Support rails: ~5cm height, ~3cm thickness
     * Support positioning: ~20cm below tabletop

2. Organize features into a structured plan:
   a. Create a scene, camera, and renderer
   b. Create tabletop as a BoxGeometry
   c. Create four legs as BoxGeometry
   d. Create support rails as BoxGeometry
   e. Group all components into a single Object3D
   f. Position components correctly
   g. Set up lighting
   h. Set up animation loop and controls

3. Basic structure of Three.js script:
   - Import Three.js library
   - Set up scene, camera, and renderer
   - Define all dimensional variables
   - Create functions for table components (tabletop, leg, support rail)
   - Create and position all components
   - Group components into a table object
   - Set up lighting
   - Set up orbit controls for interaction
   - Define animation loop
   - Handle window resizing

4. Materials and textures:
   - Use MeshStandardMaterial for realistic lighting and shadows
   - Apply wood texture to all components

5. Lighting setup:
   - Add ambient light for overall illumination
   - Add directional light for shadows and depth
   - Add point lights to highlight details

6. Potential animations:
   - Rotate the table to showcase its structure
   - Allow user interaction with orbit controls

7. Potential challenges and solutions:
   - Correct positioning of components: Use careful calculations and Three.js positioning
   - Realistic wood appearance: Use texture mapping
   - Performance with complex geometry: Use appropriate level of detail

8. Summary of structured plan:
   Create a Three.js scene with a dining table, including tabletop, legs, and support structure. Use realistic dimensions and wood textures. Set up proper lighting to showcase the table's features. Implement orbit controls for user interaction and add subtle animation to rotate the table.
</model_planning>

<threejs_output>
// Dining Table Model
// All dimensions in centimeters

// Scene setup
const scene = new THREE.Scene();
const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
const renderer = new THREE.WebGLRenderer();
renderer.setSize(window.innerWidth, window.innerHeight);
document.body.appendChild(renderer.domElement);

// Dimensions
const tableLength = 150;
const tableWidth = 90;
const tableHeight = 75;
const topThickness = 4;
const legWidth = 8;
const legInset = 5;
const supportHeight = 5;
const supportThickness = 3;

// Materials
const woodTexture = new THREE.TextureLoader().load('wood_texture.jpg');
const woodMaterial = new THREE.MeshStandardMaterial({ map: woodTexture });

// Table components
function createTabletop() {
  const geometry = new THREE.BoxGeometry(tableLength, topThickness, tableWidth);
  return new THREE.Mesh(geometry, woodMaterial);
}

function createLeg() {
  const geometry = new THREE.BoxGeometry(legWidth, tableHeight - topThickness, legWidth);
  return new THREE.Mesh(geometry, woodMaterial);
}

function createSupportRail(length) {
  const geometry = new THREE.BoxGeometry(length, supportHeight, supportThickness);
  return new THREE.Mesh(geometry, woodMaterial);
}

// Create table
const table = new THREE.Object3D();

// Tabletop
const tabletop = createTabletop();
tabletop.position.y = tableHeight - topThickness / 2;
table.add(tabletop);

// Legs
const legPositions = [
  { x: -tableLength/2 + legInset + legWidth/2, z: -tableWidth/2 + legInset + legWidth/2 },
  { x: tableLength/2 - legInset - legWidth/2, z: -tableWidth/2 + legInset + legWidth/2 },
  { x: -tableLength/2 + legInset + legWidth/2, z: tableWidth/2 - legInset - legWidth/2 },
  { x: tableLength/2 - legInset - legWidth/2, z: tableWidth/2 - legInset - legWidth/2 }
];

legPositions.forEach(pos => {
  const leg = createLeg();
  leg.position.set(pos.x, (tableHeight - topThickness) / 2, pos.z);
  table.add(leg);
});

// Support rails
const longRailLength = tableLength - 2 * legInset - 2 * legWidth;
const shortRailLength = tableWidth - 2 * legInset - 2 * legWidth;

const longRailPositions = [
  { x: 0, z: -tableWidth/2 + legInset + legWidth/2 },
  { x: 0, z: tableWidth/2 - legInset - legWidth/2 }
];

const shortRailPositions = [
  { x: -tableLength/2 + legInset + legWidth/2, z: 0 },
  { x: tableLength/2 - legInset - legWidth/2, z: 0 }
];

longRailPositions.forEach(pos => {
  const rail = createSupportRail(longRailLength);
  rail.position.set(pos.x, tableHeight - topThickness - supportHeight - 20, pos.z);
  table.add(rail);
});

shortRailPositions.forEach(pos => {
  const rail = createSupportRail(shortRailLength);
  rail.rotation.y = Math.PI / 2;
  rail.position.set(pos.x, tableHeight - topThickness - supportHeight - 20, pos.z);
  table.add(rail);
});

scene.add(table);

// Lighting
const ambientLight = new THREE.AmbientLight(0x404040);
scene.add(ambientLight);

const directionalLight = new THREE.DirectionalLight(0xffffff, 0.5);
directionalLight.position.set(1, 1, 1);
scene.add(directionalLight);

const pointLight1 = new THREE.PointLight(0xffffff, 0.5);
pointLight1.position.set(0, 100, 0);
scene.add(pointLight1);

const pointLight2 = new THREE.PointLight(0xffffff, 0.3);
pointLight2.position.set(100, 0, 100);
scene.add(pointLight2);

// Camera position
camera.position.set(150, 100, 150);
camera.lookAt(scene.position);

// Orbit controls
const controls = new THREE.OrbitControls(camera, renderer.domElement);

// Animation
function animate() {
  requestAnimationFrame(animate);
  table.rotation.y += 0.002;
  controls.update();
  renderer.render(scene, camera);
}
animate();

// Handle window resizing
window.addEventListener('resize', function() {
  camera.aspect = window.innerWidth / window.innerHeight;
  camera.updateProjectionMatrix();
  renderer.setSize(window.innerWidth, window.innerHeight);
});
</threejs_output>
</ideal_output>
</example>
</examples>

"#;

const INSTRUCTION_HEAD: &str = r#"You are Imagine3D, an expert AI assistant specializing in generating accurate, error-free Three.js scripts based on textual descriptions or images of 3D objects. Your task is to create precise, functional 3D models that can be directly used in a Three.js environment.

Here is the description of the 3D object you need to model:

<description>
"#;

const INSTRUCTION_TAIL: &str = r#"
</description>

Please follow these guidelines to create the Three.js script:

1. Analyze the Input:
   - For textual descriptions, carefully extract all dimensions, shapes, features, and spatial relationships.
   - For images, if mentioned, interpret the 3D structure as accurately as possible.

2. Use Three.js Best Practices:
   - Use valid Three.js syntax only.
   - Utilize appropriate geometries, materials, and lighting.
   - Ensure the scene is properly set up with camera and renderer.
   - Avoid redundant or unused components in the script.
   - Ensure readability and maintainability.

3. Dimensions and Units:
   - Use appropriate units for Three.js (typically scene units).
   - If units are ambiguous, make reasonable assumptions based on context.
   - When given ranges, use random but realistic values within the specified range.

4. Script Structure:
   - Use 2 spaces for indentation.
   - Organize the script into logical sections:
     a. Scene, camera, and renderer setup
     b. Geometry and material creation
     c. Object positioning and scaling
     d. Lighting setup
     e. Animation (if applicable)
     f. Render loop

5. Verification:
   - Check for syntax errors.
   - Ensure all objects and variables are used correctly.
   - Validate that the generated script will execute without additional user input.

Before generating the final output, wrap your model planning inside <model_planning> tags:
1. Extract all features and relationships from the input.
2. Organize these features into a structured plan for the Three.js model.
3. Sketch out the basic structure of the Three.js script, including main objects and functions.
4. Plan out the materials and textures to be used for each part of the model.
5. Design the lighting setup, including type, position, and intensity of lights.
6. Consider potential animations or interactive elements that could enhance the model.
7. Identify potential challenges in implementing the model and how to address them.
8. Summarize the structured plan to ensure alignment with the user's intent.

Provide your ThreeJS code inside <threejs_output> tags.

Remember to provide a complete, executable Three.js script that can be directly copied and pasted into a web environment without errors."#;

/// Renders the instruction prompt with the user's description substituted
/// into its `<description>` section.
pub fn instruction(description: &str) -> String {
    format!("{INSTRUCTION_HEAD}{description}{INSTRUCTION_TAIL}")
}

/// Builds the message list for one generation request.
///
/// Produces, in order: a user message whose content parts are the worked
/// examples, the instruction prompt, and (when supplied) the inline image;
/// then an assistant message seeding the reply with [`PLANNING_SEED`].
pub fn build_messages(description: &str, image: Option<&EncodedImage>) -> Vec<Message> {
    let mut parts = vec![
        ContentPart::text(WORKED_EXAMPLES),
        ContentPart::text(instruction(description)),
    ];
    if let Some(image) = image {
        parts.push(ContentPart::image(image));
    }
    vec![
        Message::user(parts),
        Message::assistant(vec![ContentPart::text(PLANNING_SEED)]),
    ]
}
